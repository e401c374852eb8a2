//! Session state machines.
//!
//! Every session moves through the same lifecycle:
//!
//! | Phase       | Meaning |
//! |-------------|---------|
//! | `Idle`      | No quiz loaded; answers are ignored |
//! | `Active`    | Cursor inside the quiz; answers accepted |
//! | `Completed` | Finished (end of quiz, time up, or stopped) |
//!
//! The policies differ in how an answer moves the cursor:
//!
//! | Module     | Policy |
//! |------------|--------|
//! | `practice` | Must answer correctly to advance; mistakes counted |
//! | `game`     | Always advances (cyclically); timed and scored |
//! | `print`    | Holds one prepared quiz for question/answer sheets |
//! | `cards`    | Flashcard browser over the current pool |

pub mod cards;
pub mod game;
pub mod practice;
pub mod print;

use serde::{Deserialize, Serialize};

use crate::model::{Quiz, QuizItem};

pub use cards::{CardDeck, CardFace};
pub use game::{EndReason, GameRules, GameSession, GameSnapshot, GameSummary, TickOutcome};
pub use practice::PracticeSession;
pub use print::PrintSession;

/// Lifecycle phase shared by all session policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Completed,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The session was not accepting answers; nothing changed.
    Ignored,
}

impl AnswerOutcome {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }
}

/// A quiz plus a position in it.
#[derive(Debug, Clone, Default)]
pub struct QuizCursor {
    quiz: Quiz,
    position: usize,
}

impl QuizCursor {
    pub fn new(quiz: Quiz) -> Self {
        Self { quiz, position: 0 }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.quiz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiz.is_empty()
    }

    pub fn current(&self) -> Option<&QuizItem> {
        self.quiz.get(self.position)
    }

    /// Move forward by one. Returns `true` once the end has been reached.
    pub fn step(&mut self) -> bool {
        if self.position < self.quiz.len() {
            self.position += 1;
        }
        self.position >= self.quiz.len()
    }

    /// Move forward by one, wrapping to the start.
    pub fn step_cyclic(&mut self) {
        if !self.quiz.is_empty() {
            self.position = (self.position + 1) % self.quiz.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, QuestionDirection};

    fn quiz(n: i64) -> Quiz {
        Quiz::new(
            (1..=n)
                .map(|i| {
                    QuizItem::new(
                        Entry::new(i, format!("en{i}"), format!("jp{i}")),
                        QuestionDirection::JpToEn,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn linear_step_reaches_end() {
        let mut cursor = QuizCursor::new(quiz(2));
        assert!(!cursor.step());
        assert_eq!(cursor.current().unwrap().entry.no, 2);
        assert!(cursor.step());
        assert!(cursor.current().is_none());
        assert!(cursor.step());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn cyclic_step_wraps() {
        let mut cursor = QuizCursor::new(quiz(3));
        for _ in 0..3 {
            cursor.step_cyclic();
        }
        assert_eq!(cursor.position(), 0);
        let mut empty = QuizCursor::default();
        empty.step_cyclic();
        assert_eq!(empty.position(), 0);
    }
}
