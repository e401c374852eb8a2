//! Persisted summary of a finished game.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::GameOutcome;
use crate::session::EndReason;

/// One finished game, as written by `tango game --save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Name of the word list played.
    pub word_list: String,
    /// Inclusive entry-number range the pool was drawn from.
    pub range: (i64, i64),
    pub questions: usize,
    pub score: u64,
    pub ok: u32,
    pub ng: u32,
    /// Correct answers over answered questions, `0.0..=1.0`.
    pub accuracy: f64,
    pub best_streak: u32,
    pub time_left: f64,
    pub reason: EndReason,
    /// Best score after reconciling with the gateway.
    pub best: u64,
    pub new_record: bool,
}

impl GameReport {
    pub fn from_outcome(
        outcome: &GameOutcome,
        word_list: impl Into<String>,
        range: (i64, i64),
        questions: usize,
    ) -> Self {
        let s = &outcome.summary;
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            word_list: word_list.into(),
            range,
            questions,
            score: s.score,
            ok: s.ok,
            ng: s.ng,
            accuracy: s.accuracy(),
            best_streak: s.best_streak,
            time_left: s.time_left,
            reason: s.reason,
            best: outcome.best,
            new_record: outcome.is_new_record(),
        }
    }

    /// `game-<timestamp>.json`, sortable by time.
    pub fn file_name(&self) -> String {
        format!("game-{}.json", self.created_at.format("%Y%m%dT%H%M%S%.3fZ"))
    }

    /// Save report as JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load report from JSON.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GameReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
