//! Core trait definitions for high-score backends.
//!
//! Implemented by the `tango-gateway` crate (HTTP and in-memory).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

// ---------------------------------------------------------------------------
// High-score gateway trait
// ---------------------------------------------------------------------------

/// Remote store of the all-time best score.
///
/// The backend is authoritative: it keeps the maximum of every score it has
/// been sent and reports that maximum back.
#[async_trait]
pub trait HighScoreGateway: Send + Sync {
    /// Human-readable backend name (e.g. "http").
    fn name(&self) -> &str;

    /// Current best score.
    async fn fetch_best(&self) -> Result<HighScore, GatewayError>;

    /// Report a finished game's score.
    async fn submit_score(&self, score: u64) -> Result<SubmitOutcome, GatewayError>;
}

/// Body of `GET /api/highscore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

/// Body of `POST /api/highscore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub score: u64,
}

/// Response to `POST /api/highscore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// Best score after this submission.
    pub best: u64,
    /// Whether this submission raised the best.
    #[serde(default)]
    pub updated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highscore_ignores_extra_fields() {
        let hs: HighScore =
            serde_json::from_str(r#"{"best": 340, "updatedAt": "2024-01-01"}"#).unwrap();
        assert_eq!(hs.best, 340);
    }

    #[test]
    fn submit_outcome_defaults_updated() {
        let out: SubmitOutcome = serde_json::from_str(r#"{"best": 90}"#).unwrap();
        assert_eq!(out, SubmitOutcome { best: 90, updated: false });
    }

    #[test]
    fn submit_request_shape() {
        let body = serde_json::to_value(SubmitRequest { score: 120 }).unwrap();
        assert_eq!(body, serde_json::json!({"score": 120}));
    }
}
