//! Print/export mode: one prepared quiz rendered as question and answer sheets.

use rand::Rng;

use crate::builder::prepare_choices;
use crate::model::{Entry, Quiz};
use crate::pool::Pool;
use crate::session::Phase;

/// Holds the quiz that both sheets are rendered from.
///
/// Choices are attached when the quiz is loaded so that the question sheet
/// and the answer sheet always show the same options in the same order.
#[derive(Debug, Clone, Default)]
pub struct PrintSession {
    sheet: Option<Quiz>,
}

impl PrintSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare choices for `quiz` and store it. An empty quiz changes nothing.
    pub fn prepare<R: Rng + ?Sized>(
        &mut self,
        quiz: Quiz,
        pool: &Pool,
        master: &[Entry],
        choices: usize,
        rng: &mut R,
    ) -> bool {
        if quiz.is_empty() {
            return false;
        }
        let prepared = prepare_choices(quiz, pool, master, choices, rng);
        tracing::info!(questions = prepared.len(), "print sheet prepared");
        self.sheet = Some(prepared);
        true
    }

    /// The stored quiz, if any.
    pub fn sheet(&self) -> Option<&Quiz> {
        self.sheet.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.sheet {
            Some(_) => Phase::Active,
            None => Phase::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.sheet = None;
    }
}
