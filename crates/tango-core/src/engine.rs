//! Async game loop.
//!
//! Drives a [`GameSession`] from three event sources: a 100 ms clock, an
//! input channel of answers, and the feedback delay that moves to the next
//! question. Session state is owned by the loop; nothing else touches it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::answer::resolve_input;
use crate::highscore::{report_score, BestScore};
use crate::model::{Quiz, QuizItem};
use crate::session::{AnswerOutcome, GameRules, GameSession, GameSnapshot, GameSummary, TickOutcome};
use crate::traits::{HighScoreGateway, SubmitOutcome};

/// Length of one clock tick.
pub const TICK: Duration = Duration::from_millis(100);

/// Configuration for the game engine.
#[derive(Debug, Clone)]
pub struct GameEngineConfig {
    pub rules: GameRules,
    /// Pause between scoring an answer and showing the next question.
    pub feedback_delay: Duration,
}

impl Default for GameEngineConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            feedback_delay: Duration::from_millis(80),
        }
    }
}

/// Events fed into a running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameInput {
    Answer(String),
    Stop,
}

/// Progress reporting trait.
pub trait GameObserver: Send + Sync {
    fn on_question(&self, item: &QuizItem, hud: &GameSnapshot);
    fn on_answer(&self, item: &QuizItem, outcome: AnswerOutcome, hud: &GameSnapshot);
    fn on_tick(&self, _hud: &GameSnapshot) {}
    fn on_finish(&self, summary: &GameSummary);
}

/// No-op observer.
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_question(&self, _: &QuizItem, _: &GameSnapshot) {}
    fn on_answer(&self, _: &QuizItem, _: AnswerOutcome, _: &GameSnapshot) {}
    fn on_finish(&self, _: &GameSummary) {}
}

/// Everything known once a game has ended and been reported.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub summary: GameSummary,
    /// Best score before this game.
    pub previous_best: u64,
    /// Best score after reconciling with the gateway reply.
    pub best: u64,
    /// Gateway reply, absent when the report failed.
    pub report: Option<SubmitOutcome>,
}

impl GameOutcome {
    pub fn is_new_record(&self) -> bool {
        self.summary.score > self.previous_best
    }
}

/// Runs one game and reports its score.
pub struct GameEngine {
    config: GameEngineConfig,
    gateway: Arc<dyn HighScoreGateway>,
    best: BestScore,
}

impl GameEngine {
    pub fn new(
        config: GameEngineConfig,
        gateway: Arc<dyn HighScoreGateway>,
        best: BestScore,
    ) -> Self {
        Self {
            config,
            gateway,
            best,
        }
    }

    pub fn best(&self) -> BestScore {
        self.best
    }

    /// Play `quiz` until time runs out, `Stop` arrives, or `input` closes.
    ///
    /// Returns `None` without reporting anything when the quiz is empty.
    pub async fn run(
        &mut self,
        quiz: Quiz,
        mut input: mpsc::Receiver<GameInput>,
        observer: &dyn GameObserver,
    ) -> Option<GameOutcome> {
        let mut session = GameSession::new(self.config.rules);
        if !session.start(quiz) {
            return None;
        }
        if let Some(item) = session.current() {
            observer.on_question(item, &session.snapshot());
        }

        let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
        let mut advance_at: Option<Instant> = None;

        let summary = loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match session.tick() {
                        TickOutcome::Expired(summary) => break summary,
                        TickOutcome::Running => observer.on_tick(&session.snapshot()),
                        TickOutcome::Ignored => {}
                    }
                }
                msg = input.recv() => match msg {
                    Some(GameInput::Answer(text)) => {
                        let Some(item) = session.current().cloned() else {
                            continue;
                        };
                        let outcome = session.submit(resolve_input(&item, &text));
                        if outcome != AnswerOutcome::Ignored {
                            observer.on_answer(&item, outcome, &session.snapshot());
                            advance_at = Some(Instant::now() + self.config.feedback_delay);
                        }
                    }
                    Some(GameInput::Stop) | None => {
                        if let Some(summary) = session.stop() {
                            break summary;
                        }
                    }
                },
                _ = time::sleep_until(advance_at.unwrap_or_else(Instant::now)), if advance_at.is_some() => {
                    advance_at = None;
                    if session.advance() {
                        if let Some(item) = session.current() {
                            observer.on_question(item, &session.snapshot());
                        }
                    }
                }
            }
        };
        drop(ticker);

        observer.on_finish(&summary);

        let previous_best = self.best.get();
        let report = report_score(self.gateway.as_ref(), &mut self.best, summary.score).await;

        Some(GameOutcome {
            summary,
            previous_best,
            best: self.best.get(),
            report,
        })
    }
}
