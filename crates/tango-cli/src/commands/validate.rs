//! The `tango validate` command.

use std::path::PathBuf;

use anyhow::Result;

use tango_core::parser::{load_word_list, validate_word_list};

pub fn execute(path: PathBuf) -> Result<()> {
    let list = load_word_list(&path)?;

    match list.bounds() {
        Some((first, last)) => println!(
            "Word list: {} ({} entries, {first}-{last})",
            list.name,
            list.len()
        ),
        None => println!("Word list: {} (0 entries)", list.name),
    }

    let warnings = validate_word_list(&list);
    for w in &warnings {
        let prefix = w
            .no
            .map(|no| format!("  [{no}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Word list valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
