//! Answer normalization and checking.

use crate::model::{QuestionDirection, QuizItem};

const QUOTES: [char; 4] = ['\u{201C}', '\u{201D}', '"', '\''];

/// Normalize a typed English answer for comparison.
///
/// Lowercases, drops quote characters, and collapses whitespace runs into a
/// single space with no leading or trailing space. Idempotent.
pub fn normalize(input: &str) -> String {
    let lowered: String = input
        .to_lowercase()
        .chars()
        .filter(|c| !QUOTES.contains(c))
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `answer` is correct for `item`.
///
/// Text-entry items compare normalized strings; multiple-choice items compare
/// the selected option verbatim.
pub fn is_correct(item: &QuizItem, answer: &str) -> bool {
    match item.direction {
        QuestionDirection::JpToEn => normalize(answer) == normalize(&item.entry.en),
        QuestionDirection::EnToJp => answer == item.entry.jp,
    }
}

/// Map a typed option letter (`a`..`h`, any case) to the option text.
///
/// Only applies to items with prepared choices; anything else is returned
/// unchanged so it can be checked as a literal answer.
pub fn resolve_input<'a>(item: &'a QuizItem, input: &'a str) -> &'a str {
    let choices = item.choices();
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() && !choices.is_empty() => {
            let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            choices.get(index).map(String::as_str).unwrap_or(input)
        }
        _ => input,
    }
}
