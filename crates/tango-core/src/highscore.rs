//! Client-side view of the all-time best score.
//!
//! The gateway is authoritative. The client keeps a shadow copy that only
//! ever moves up, so a failed or stale report never lowers what is shown.

use crate::traits::{HighScoreGateway, SubmitOutcome};

/// Cached best score. Never decreased by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore(u64);

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Fold in a value observed from the gateway. Returns `true` if it raised the cache.
    pub fn reconcile(&mut self, observed: u64) -> bool {
        if observed > self.0 {
            self.0 = observed;
            true
        } else {
            false
        }
    }
}

/// Fetch the best score at boot. Any failure yields 0.
pub async fn load_initial_best(gateway: &dyn HighScoreGateway) -> BestScore {
    match gateway.fetch_best().await {
        Ok(hs) => {
            tracing::debug!(gateway = gateway.name(), best = hs.best, "loaded best score");
            BestScore::new(hs.best)
        }
        Err(e) => {
            tracing::warn!(
                gateway = gateway.name(),
                transport = e.is_transport(),
                error = %e,
                "could not load best score"
            );
            BestScore::default()
        }
    }
}

/// Send a finished game's score and reconcile the cache with the reply.
///
/// Failures are logged and absorbed; the cache is left untouched.
pub async fn report_score(
    gateway: &dyn HighScoreGateway,
    best: &mut BestScore,
    score: u64,
) -> Option<SubmitOutcome> {
    match gateway.submit_score(score).await {
        Ok(outcome) => {
            best.reconcile(outcome.best);
            tracing::info!(
                gateway = gateway.name(),
                score,
                best = best.get(),
                updated = outcome.updated,
                "score reported"
            );
            Some(outcome)
        }
        Err(e) => {
            tracing::warn!(
                gateway = gateway.name(),
                score,
                transport = e.is_transport(),
                error = %e,
                "score report failed"
            );
            None
        }
    }
}
