//! tango-core: Quiz engine, session state machines, and scoring.
//!
//! This crate defines the word-list data model, quiz sampling, distractor
//! generation, and the practice / game / print / cards session policies that
//! the rest of tango builds on.

pub mod answer;
pub mod builder;
pub mod distractor;
pub mod engine;
pub mod error;
pub mod highscore;
pub mod model;
pub mod parser;
pub mod pool;
pub mod report;
pub mod session;
pub mod traits;

pub use builder::{build_quiz, build_with_settings, prepare_choices, session_rng, QuizSettings};
pub use distractor::{build_distractors, DEFAULT_CHOICES};
pub use engine::{GameEngine, GameEngineConfig, GameInput, GameObserver, GameOutcome, NoopObserver};
pub use error::GatewayError;
pub use highscore::{load_initial_best, report_score, BestScore};
pub use model::{Direction, Entry, QuestionDirection, Quiz, QuizItem, WordList};
pub use pool::{filter_pool, Pool, PoolStats, MAX_QUESTIONS};
pub use report::GameReport;
pub use session::{AnswerOutcome, Phase};
pub use traits::{HighScore, HighScoreGateway, SubmitOutcome};
