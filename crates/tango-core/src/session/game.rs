//! Timed game mode: scoring, clock, and termination.
//!
//! Time is held in tenths of a second so the 100 ms tick never drifts.

use serde::{Deserialize, Serialize};

use crate::answer::is_correct;
use crate::model::{Quiz, QuizItem};
use crate::session::{AnswerOutcome, Phase, QuizCursor};

/// Clock ceiling: 999.0 s.
pub const MAX_TENTHS: u32 = 9_990;

/// Below this the HUD flags low time: 20.0 s.
pub const LOW_TIME_TENTHS: u32 = 200;

/// Points for a correct answer.
pub const CORRECT_POINTS: u64 = 10;

/// Score lost on each miss after the first in a row.
pub const STREAK_PENALTY_POINTS: u64 = 2;

const CORRECT_BONUS_TENTHS: u32 = 10;
const MISS_PENALTY_TENTHS: u32 = 10;
const STREAK_PENALTY_TENTHS: u32 = 20;

/// Tunable parameters of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Starting clock in tenths of a second.
    pub start_tenths: u32,
}

impl GameRules {
    pub fn with_duration_secs(secs: u32) -> Self {
        Self {
            start_tenths: secs.saturating_mul(10).min(MAX_TENTHS),
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::with_duration_secs(120)
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TimeUp,
    Stopped,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::TimeUp => write!(f, "time up"),
            EndReason::Stopped => write!(f, "stopped"),
        }
    }
}

/// Running counters for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub ok: u32,
    pub ng: u32,
    pub streak: u32,
    pub wrong_streak: u32,
    pub best_streak: u32,
}

/// Final result of a game, produced exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u64,
    pub ok: u32,
    pub ng: u32,
    pub best_streak: u32,
    /// Seconds left on the clock when the game ended.
    pub time_left: f64,
    pub reason: EndReason,
}

impl GameSummary {
    pub fn answered(&self) -> u32 {
        self.ok + self.ng
    }

    /// Fraction of correct answers in `0.0..=1.0`; zero when nothing was answered.
    pub fn accuracy(&self) -> f64 {
        match self.answered() {
            0 => 0.0,
            n => self.ok as f64 / n as f64,
        }
    }
}

/// What the HUD shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub time_left: f64,
    pub score: u64,
    pub ok: u32,
    pub ng: u32,
    pub streak: u32,
    pub is_low_time: bool,
}

impl GameSnapshot {
    /// Whether the current score beats `best`.
    pub fn is_leading(&self, best: u64) -> bool {
        self.score > best
    }
}

/// Outcome of one clock tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The game is not running.
    Ignored,
    Running,
    /// The clock hit zero on this tick.
    Expired(GameSummary),
}

#[derive(Debug, Clone, Default)]
pub struct GameSession {
    rules: GameRules,
    cursor: QuizCursor,
    board: Scoreboard,
    tenths: u32,
    locked: bool,
    phase: Phase,
}

impl GameSession {
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            tenths: rules.start_tenths,
            ..Self::default()
        }
    }

    /// Load `quiz`, reset the scoreboard and clock, and become active.
    /// An empty quiz changes nothing.
    pub fn start(&mut self, quiz: Quiz) -> bool {
        if quiz.is_empty() {
            return false;
        }
        tracing::info!(
            questions = quiz.len(),
            seconds = self.rules.start_tenths / 10,
            "game started"
        );
        self.cursor = QuizCursor::new(quiz);
        self.board = Scoreboard::default();
        self.tenths = self.rules.start_tenths;
        self.locked = false;
        self.phase = Phase::Active;
        true
    }

    /// Score an answer to the current question and lock it.
    pub fn submit(&mut self, answer: &str) -> AnswerOutcome {
        if self.phase != Phase::Active || self.locked {
            return AnswerOutcome::Ignored;
        }
        let Some(item) = self.cursor.current() else {
            return AnswerOutcome::Ignored;
        };

        let correct = is_correct(item, answer);
        if correct {
            self.apply_correct();
        } else {
            self.apply_incorrect();
        }
        self.locked = true;
        tracing::debug!(
            correct,
            score = self.board.score,
            tenths = self.tenths,
            "answer scored"
        );
        AnswerOutcome::from_correct(correct)
    }

    fn apply_correct(&mut self) {
        let b = &mut self.board;
        b.ok += 1;
        b.streak += 1;
        b.wrong_streak = 0;
        b.best_streak = b.best_streak.max(b.streak);
        b.score += CORRECT_POINTS;
        self.tenths = (self.tenths + CORRECT_BONUS_TENTHS).min(MAX_TENTHS);
    }

    fn apply_incorrect(&mut self) {
        let b = &mut self.board;
        b.ng += 1;
        b.streak = 0;
        b.wrong_streak += 1;
        self.tenths = self.tenths.saturating_sub(MISS_PENALTY_TENTHS);
        if b.wrong_streak >= 2 {
            b.score = b.score.saturating_sub(STREAK_PENALTY_POINTS);
            self.tenths = self.tenths.saturating_sub(STREAK_PENALTY_TENTHS);
        }
    }

    /// Move to the next question (wrapping) and unlock.
    ///
    /// Returns `false` when there was nothing to advance from.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Active || !self.locked {
            return false;
        }
        self.cursor.step_cyclic();
        self.locked = false;
        true
    }

    /// Advance the clock by 100 ms.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Active {
            return TickOutcome::Ignored;
        }
        self.tenths = self.tenths.saturating_sub(1);
        if self.tenths == 0 {
            TickOutcome::Expired(self.finish(EndReason::TimeUp))
        } else {
            TickOutcome::Running
        }
    }

    /// End the game early. Returns the summary only on the first call.
    pub fn stop(&mut self) -> Option<GameSummary> {
        if self.phase != Phase::Active {
            return None;
        }
        Some(self.finish(EndReason::Stopped))
    }

    fn finish(&mut self, reason: EndReason) -> GameSummary {
        self.phase = Phase::Completed;
        self.locked = true;
        let summary = GameSummary {
            score: self.board.score,
            ok: self.board.ok,
            ng: self.board.ng,
            best_streak: self.board.best_streak,
            time_left: self.time_left(),
            reason,
        };
        tracing::info!(
            score = summary.score,
            ok = summary.ok,
            ng = summary.ng,
            %reason,
            "game over"
        );
        summary
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Clock in tenths of a second.
    pub fn time_left_tenths(&self) -> u32 {
        self.tenths
    }

    /// Clock in seconds.
    pub fn time_left(&self) -> f64 {
        self.tenths as f64 / 10.0
    }

    /// The question on screen while active.
    pub fn current(&self) -> Option<&QuizItem> {
        match self.phase {
            Phase::Active => self.cursor.current(),
            _ => None,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            time_left: self.time_left(),
            score: self.board.score,
            ok: self.board.ok,
            ng: self.board.ng,
            streak: self.board.streak,
            is_low_time: self.tenths < LOW_TIME_TENTHS,
        }
    }
}
