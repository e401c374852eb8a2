//! Practice mode: the learner must answer correctly to move on.

use crate::answer::is_correct;
use crate::model::{Quiz, QuizItem};
use crate::session::{AnswerOutcome, Phase, QuizCursor};

#[derive(Debug, Clone, Default)]
pub struct PracticeSession {
    cursor: QuizCursor,
    mistakes: u32,
    phase: Phase,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `quiz` and become active. An empty quiz changes nothing.
    pub fn start(&mut self, quiz: Quiz) -> bool {
        if quiz.is_empty() {
            return false;
        }
        tracing::info!(questions = quiz.len(), "practice started");
        self.cursor = QuizCursor::new(quiz);
        self.mistakes = 0;
        self.phase = Phase::Active;
        true
    }

    /// Drop the quiz and return to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self, answer: &str) -> AnswerOutcome {
        if self.phase != Phase::Active {
            return AnswerOutcome::Ignored;
        }
        let Some(item) = self.cursor.current() else {
            return AnswerOutcome::Ignored;
        };

        if is_correct(item, answer) {
            if self.cursor.step() {
                self.phase = Phase::Completed;
                tracing::info!(mistakes = self.mistakes, "practice completed");
            }
            AnswerOutcome::Correct
        } else {
            self.mistakes += 1;
            AnswerOutcome::Incorrect
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Zero-based index of the question being asked.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// The question to present, while active.
    pub fn current(&self) -> Option<&QuizItem> {
        match self.phase {
            Phase::Active => self.cursor.current(),
            _ => None,
        }
    }
}
