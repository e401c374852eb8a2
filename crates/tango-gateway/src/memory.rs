//! In-process high-score gateway for offline play and tests.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use tango_core::error::GatewayError;
use tango_core::traits::{HighScore, HighScoreGateway, SubmitOutcome};

/// Keeps the maximum score it has been sent, like the real server.
pub struct MemoryGateway {
    best: Mutex<u64>,
    /// When false every call fails with `Unavailable`.
    online: AtomicBool,
    /// Number of submissions received.
    submit_count: AtomicU32,
    /// Last score submitted.
    last_score: Mutex<Option<u64>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::with_best(0)
    }

    /// Start with an existing best score.
    pub fn with_best(best: u64) -> Self {
        Self {
            best: Mutex::new(best),
            online: AtomicBool::new(true),
            submit_count: AtomicU32::new(0),
            last_score: Mutex::new(None),
        }
    }

    /// A gateway whose every call fails.
    pub fn offline() -> Self {
        let gateway = Self::new();
        gateway.set_online(false);
        gateway
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count.load(Ordering::Relaxed)
    }

    pub fn last_score(&self) -> Option<u64> {
        *self.last_score.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_online(&self) -> Result<(), GatewayError> {
        if self.online.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(GatewayError::Unavailable)
        }
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HighScoreGateway for MemoryGateway {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_best(&self) -> Result<HighScore, GatewayError> {
        self.check_online()?;
        let best = *self.best.lock().unwrap_or_else(|e| e.into_inner());
        Ok(HighScore { best })
    }

    async fn submit_score(&self, score: u64) -> Result<SubmitOutcome, GatewayError> {
        self.submit_count.fetch_add(1, Ordering::Relaxed);
        self.check_online()?;
        *self.last_score.lock().unwrap_or_else(|e| e.into_inner()) = Some(score);

        let mut best = self.best.lock().unwrap_or_else(|e| e.into_inner());
        let updated = score > *best;
        if updated {
            *best = score;
        }
        Ok(SubmitOutcome {
            best: *best,
            updated,
        })
    }
}
