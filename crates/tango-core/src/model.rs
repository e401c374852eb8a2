//! Core data model types for tango.
//!
//! These are the fundamental types the whole system uses to represent word
//! entries, the master word list, and the quizzes drawn from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Stable ordering key, unique within a word list.
    pub no: i64,
    /// English headword.
    pub en: String,
    /// Japanese meaning.
    pub jp: String,
}

impl Entry {
    pub fn new(no: i64, en: impl Into<String>, jp: impl Into<String>) -> Self {
        Self {
            no,
            en: en.into(),
            jp: jp.into(),
        }
    }
}

/// The master word list, loaded once at boot.
///
/// Entries are kept in ascending `no` order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    /// Human-readable name of the list.
    #[serde(default)]
    pub name: String,
    entries: Vec<Entry>,
}

impl WordList {
    /// Build a word list, sorting entries by `no`.
    pub fn new(name: impl Into<String>, mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|e| e.no);
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest and highest `no` in the list, if any.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => Some((first.no, last.no)),
            _ => None,
        }
    }
}

/// Requested question direction for a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Show Japanese, type the English.
    #[serde(alias = "jp2en")]
    JpToEn,
    /// Show English, pick the Japanese from choices.
    #[serde(alias = "en2jp")]
    EnToJp,
    /// Pick one of the two per question at build time.
    Random,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::JpToEn => write!(f, "jp2en"),
            Direction::EnToJp => write!(f, "en2jp"),
            Direction::Random => write!(f, "random"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jp2en" | "jp-en" | "jp_to_en" => Ok(Direction::JpToEn),
            "en2jp" | "en-jp" | "en_to_jp" => Ok(Direction::EnToJp),
            "random" | "mixed" => Ok(Direction::Random),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Direction of a built question. Never `Random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionDirection {
    JpToEn,
    EnToJp,
}

impl fmt::Display for QuestionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionDirection::JpToEn => write!(f, "jp2en"),
            QuestionDirection::EnToJp => write!(f, "en2jp"),
        }
    }
}

/// One question of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub entry: Entry,
    pub direction: QuestionDirection,
    /// Multiple-choice options, present only for prepared `EnToJp` items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl QuizItem {
    pub fn new(entry: Entry, direction: QuestionDirection) -> Self {
        Self {
            entry,
            direction,
            options: None,
        }
    }

    /// The text shown to the learner.
    pub fn prompt(&self) -> &str {
        match self.direction {
            QuestionDirection::JpToEn => &self.entry.jp,
            QuestionDirection::EnToJp => &self.entry.en,
        }
    }

    /// The expected answer, before normalization.
    pub fn expected(&self) -> &str {
        match self.direction {
            QuestionDirection::JpToEn => &self.entry.en,
            QuestionDirection::EnToJp => &self.entry.jp,
        }
    }

    /// Prepared choices, or an empty slice for text-entry items.
    pub fn choices(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Zero-based position of the correct choice, if choices are prepared.
    pub fn correct_choice(&self) -> Option<usize> {
        self.choices().iter().position(|c| *c == self.entry.jp)
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.direction == QuestionDirection::EnToJp
    }
}

/// An ordered, immutable sequence of questions for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    items: Vec<QuizItem>,
}

impl Quiz {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<QuizItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Quiz {
    type Item = &'a QuizItem;
    type IntoIter = std::slice::Iter<'a, QuizItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display_and_parse() {
        assert_eq!(Direction::JpToEn.to_string(), "jp2en");
        assert_eq!(Direction::EnToJp.to_string(), "en2jp");
        assert_eq!("random".parse::<Direction>().unwrap(), Direction::Random);
        assert_eq!("EN2JP".parse::<Direction>().unwrap(), Direction::EnToJp);
        assert_eq!("jp-en".parse::<Direction>().unwrap(), Direction::JpToEn);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn word_list_sorts_by_no() {
        let list = WordList::new(
            "t",
            vec![
                Entry::new(3, "c", "シー"),
                Entry::new(1, "a", "エー"),
                Entry::new(2, "b", "ビー"),
            ],
        );
        let nos: Vec<i64> = list.entries().iter().map(|e| e.no).collect();
        assert_eq!(nos, vec![1, 2, 3]);
        assert_eq!(list.bounds(), Some((1, 3)));
        assert_eq!(WordList::default().bounds(), None);
    }

    #[test]
    fn quiz_item_prompt_and_expected() {
        let entry = Entry::new(1, "create", "創造する");
        let jp2en = QuizItem::new(entry.clone(), QuestionDirection::JpToEn);
        assert_eq!(jp2en.prompt(), "創造する");
        assert_eq!(jp2en.expected(), "create");
        assert!(jp2en.choices().is_empty());
        assert_eq!(jp2en.correct_choice(), None);

        let mut en2jp = QuizItem::new(entry, QuestionDirection::EnToJp);
        en2jp.options = Some(vec!["増やす".into(), "創造する".into()]);
        assert_eq!(en2jp.prompt(), "create");
        assert_eq!(en2jp.correct_choice(), Some(1));
        assert!(en2jp.is_multiple_choice());
    }

    #[test]
    fn quiz_item_serde_skips_missing_options() {
        let item = QuizItem::new(Entry::new(7, "keep", "保つ"), QuestionDirection::JpToEn);
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("options"));
        let back: QuizItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
