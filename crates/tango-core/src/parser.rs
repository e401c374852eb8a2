//! Word-list parser.
//!
//! Loads word lists from TOML or JSON files and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Entry, WordList};

/// Intermediate TOML structure for parsing word-list files.
#[derive(Debug, Deserialize)]
struct TomlWordListFile {
    #[serde(default)]
    word_list: TomlWordListHeader,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlWordListHeader {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    no: i64,
    #[serde(default)]
    en: String,
    #[serde(default)]
    jp: String,
}

/// JSON word lists are either a bare array or an object with a name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonWordListFile {
    Bare(Vec<RawEntry>),
    Named {
        #[serde(default)]
        name: String,
        entries: Vec<RawEntry>,
    },
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    Toml,
    Json,
}

impl WordListFormat {
    /// Pick a format from the file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => WordListFormat::Json,
            _ => WordListFormat::Toml,
        }
    }
}

/// Parse a word-list file into a `WordList`.
pub fn load_word_list(path: &Path) -> Result<WordList> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list: {}", path.display()))?;

    parse_word_list_str(&content, WordListFormat::from_path(path), path)
}

/// Parse a word-list string (useful for testing).
pub fn parse_word_list_str(
    content: &str,
    format: WordListFormat,
    source_path: &Path,
) -> Result<WordList> {
    let (name, raw) = match format {
        WordListFormat::Toml => {
            let parsed: TomlWordListFile = toml::from_str(content)
                .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;
            (parsed.word_list.name, parsed.entries)
        }
        WordListFormat::Json => {
            let parsed: JsonWordListFile = serde_json::from_str(content)
                .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;
            match parsed {
                JsonWordListFile::Bare(entries) => (String::new(), entries),
                JsonWordListFile::Named { name, entries } => (name, entries),
            }
        }
    };

    let name = if name.is_empty() {
        source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        name
    };

    let entries = raw
        .into_iter()
        .map(|r| Entry {
            no: r.no,
            en: r.en.trim().to_string(),
            jp: r.jp.trim().to_string(),
        })
        .collect();

    let list = WordList::new(name, entries);
    tracing::debug!(name = %list.name, entries = list.len(), "loaded word list");
    Ok(list)
}

/// A warning from word-list validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The entry number (if applicable).
    pub no: Option<i64>,
    /// Warning message.
    pub message: String,
}

/// Validate a word list for common issues.
pub fn validate_word_list(list: &WordList) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if list.is_empty() {
        warnings.push(ValidationWarning {
            no: None,
            message: "word list has no entries".into(),
        });
        return warnings;
    }

    let mut seen_nos = HashSet::new();
    for entry in list.entries() {
        if !seen_nos.insert(entry.no) {
            warnings.push(ValidationWarning {
                no: Some(entry.no),
                message: format!("duplicate entry number: {}", entry.no),
            });
        }
    }

    for entry in list.entries() {
        if entry.en.is_empty() {
            warnings.push(ValidationWarning {
                no: Some(entry.no),
                message: "english headword is empty".into(),
            });
        }
        if entry.jp.is_empty() {
            warnings.push(ValidationWarning {
                no: Some(entry.no),
                message: "japanese meaning is empty".into(),
            });
        }
    }

    // Shared meanings shrink the distractor pool.
    let mut seen_jp = HashSet::new();
    for entry in list.entries() {
        if !entry.jp.is_empty() && !seen_jp.insert(entry.jp.as_str()) {
            warnings.push(ValidationWarning {
                no: Some(entry.no),
                message: format!("japanese meaning repeats an earlier entry: {}", entry.jp),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[word_list]
name = "Sample"

[[entries]]
no = 2
en = "maintain"
jp = "維持する"

[[entries]]
no = 1
en = "create"
jp = "創造する"
"#;

    #[test]
    fn parse_valid_toml() {
        let list = parse_word_list_str(
            VALID_TOML,
            WordListFormat::Toml,
            &PathBuf::from("sample.toml"),
        )
        .unwrap();
        assert_eq!(list.name, "Sample");
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].no, 1);
        assert_eq!(list.entries()[1].en, "maintain");
    }

    #[test]
    fn parse_bare_json_array_uses_file_stem() {
        let json = r#"[{"no": 5, "en": " keep ", "jp": "保つ"}, {"no": 4, "en": "hold", "jp": "持つ"}]"#;
        let list =
            parse_word_list_str(json, WordListFormat::Json, &PathBuf::from("words/t1900.json"))
                .unwrap();
        assert_eq!(list.name, "t1900");
        assert_eq!(list.entries()[0].no, 4);
        assert_eq!(list.entries()[1].en, "keep");
    }

    #[test]
    fn parse_named_json_object() {
        let json = r#"{"name": "Mini", "entries": [{"no": 1, "en": "a", "jp": "あ"}]}"#;
        let list =
            parse_word_list_str(json, WordListFormat::Json, &PathBuf::from("x.json")).unwrap();
        assert_eq!(list.name, "Mini");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            WordListFormat::from_path(Path::new("a/b.JSON")),
            WordListFormat::Json
        );
        assert_eq!(
            WordListFormat::from_path(Path::new("a/b.toml")),
            WordListFormat::Toml
        );
        assert_eq!(
            WordListFormat::from_path(Path::new("noext")),
            WordListFormat::Toml
        );
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_word_list_str(bad, WordListFormat::Toml, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicates_and_blanks() {
        let list = WordList::new(
            "dupes",
            vec![
                Entry::new(1, "a", "同じ"),
                Entry::new(1, "b", "同じ"),
                Entry::new(2, "", "空"),
            ],
        );
        let warnings = validate_word_list(&list);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate entry")));
        assert!(warnings.iter().any(|w| w.message.contains("repeats")));
        assert!(warnings
            .iter()
            .any(|w| w.no == Some(2) && w.message.contains("empty")));
    }

    #[test]
    fn validate_empty_list() {
        let warnings = validate_word_list(&WordList::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no entries"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("words.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        let list = load_word_list(&file_path).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = load_word_list(Path::new("definitely/missing.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read word list"));
    }
}
