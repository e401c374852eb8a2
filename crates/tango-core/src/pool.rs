//! Range filtering of the master word list.

use crate::model::Entry;

/// The entries currently in scope, in master-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    entries: Vec<Entry>,
}

impl Pool {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Select the entries whose `no` lies in the inclusive range spanned by
/// `start_no` and `end_no`, in either order.
pub fn filter_pool(entries: &[Entry], start_no: i64, end_no: i64) -> Pool {
    let lo = start_no.min(end_no);
    let hi = start_no.max(end_no);

    let entries: Vec<Entry> = entries
        .iter()
        .filter(|e| (lo..=hi).contains(&e.no))
        .cloned()
        .collect();

    tracing::debug!(lo, hi, size = entries.len(), "filtered pool");
    Pool { entries }
}

/// Upper bound on the number of questions in one quiz.
pub const MAX_QUESTIONS: usize = 10_000;

/// Clamp a requested question count into `0..=MAX_QUESTIONS`.
pub fn clamp_count(requested_count: i64) -> usize {
    usize::try_from(requested_count.max(0))
        .unwrap_or(MAX_QUESTIONS)
        .min(MAX_QUESTIONS)
}

/// Pool size and the number of questions a build would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub pool_size: usize,
    pub question_count: usize,
}

impl PoolStats {
    pub fn compute(pool: &Pool, requested_count: i64, allow_duplicates: bool) -> Self {
        let requested = clamp_count(requested_count);
        let question_count = if pool.is_empty() {
            0
        } else if allow_duplicates {
            requested
        } else {
            requested.min(pool.len())
        };
        Self {
            pool_size: pool.len(),
            question_count,
        }
    }
}
