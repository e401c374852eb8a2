//! JSON answer-key export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tango_core::model::{QuestionDirection, Quiz};

use crate::html::choice_letter;

/// Answers for one printed quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerKey {
    pub title: String,
    pub date: NaiveDate,
    pub questions: usize,
    pub answers: Vec<KeyedAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedAnswer {
    /// One-based question number as printed.
    pub number: usize,
    /// Entry number in the word list.
    pub no: i64,
    pub direction: QuestionDirection,
    pub prompt: String,
    pub answer: String,
    /// Letter of the correct option for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

pub fn generate_answer_key(quiz: &Quiz, title: &str, date: NaiveDate) -> AnswerKey {
    let answers = quiz
        .iter()
        .enumerate()
        .map(|(i, item)| KeyedAnswer {
            number: i + 1,
            no: item.entry.no,
            direction: item.direction,
            prompt: item.prompt().to_string(),
            answer: item.expected().to_string(),
            letter: item.correct_choice().map(choice_letter),
            options: item.choices().to_vec(),
        })
        .collect();

    AnswerKey {
        title: title.to_string(),
        date,
        questions: quiz.len(),
        answers,
    }
}

/// Write the answer key as pretty JSON, creating parent directories.
pub fn write_answer_key(key: &AnswerKey, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(key).context("failed to serialize answer key")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write answer key to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tango_core::model::{Entry, QuizItem};

    fn make_quiz() -> Quiz {
        let mut choice = QuizItem::new(
            Entry::new(7, "choose", "選ぶ"),
            QuestionDirection::EnToJp,
        );
        choice.options = Some(vec!["捨てる".into(), "選ぶ".into(), "運ぶ".into()]);
        Quiz::new(vec![
            QuizItem::new(
                Entry::new(3, "look after", "世話をする"),
                QuestionDirection::JpToEn,
            ),
            choice,
        ])
    }

    #[test]
    fn key_lists_answers_in_order() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let key = generate_answer_key(&make_quiz(), "basic", date);

        assert_eq!(key.questions, 2);
        assert_eq!(key.answers[0].number, 1);
        assert_eq!(key.answers[0].prompt, "世話をする");
        assert_eq!(key.answers[0].answer, "look after");
        assert_eq!(key.answers[0].letter, None);

        assert_eq!(key.answers[1].no, 7);
        assert_eq!(key.answers[1].answer, "選ぶ");
        assert_eq!(key.answers[1].letter, Some('B'));
        assert_eq!(key.answers[1].options.len(), 3);
    }

    #[test]
    fn written_key_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys/answer-key.json");
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let key = generate_answer_key(&make_quiz(), "basic", date);

        write_answer_key(&key, &path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["date"], "2024-04-01");
        assert_eq!(parsed["answers"][1]["letter"], "B");
        assert!(parsed["answers"][0].get("options").is_none());

        let back: AnswerKey = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, key);
    }
}
