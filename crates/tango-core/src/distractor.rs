//! Multiple-choice option generation for English → Japanese questions.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Entry;

/// Number of options shown per multiple-choice question (A–H).
pub const DEFAULT_CHOICES: usize = 8;

/// Keep the first occurrence of each string, preserving order.
fn dedup_first<'a, I>(items: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|s| seen.insert(*s)).collect()
}

/// Build up to `k` options for `correct`, exactly one of which is `correct.jp`.
///
/// Distractors come from `pool`, or from `master` when the pool is empty.
/// The result is shorter than `k` only when the source cannot supply enough
/// distinct alternatives.
pub fn build_distractors<R: Rng + ?Sized>(
    correct: &Entry,
    pool: &[Entry],
    master: &[Entry],
    k: usize,
    rng: &mut R,
) -> Vec<String> {
    if k == 0 {
        return Vec::new();
    }

    let source = if pool.is_empty() { master } else { pool };
    let mut candidates: Vec<&str> = dedup_first(source.iter().map(|e| e.jp.as_str()))
        .into_iter()
        .filter(|jp| *jp != correct.jp)
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(k - 1);
    candidates.push(correct.jp.as_str());
    candidates.shuffle(rng);

    dedup_first(candidates)
        .into_iter()
        .take(k)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entries(n: i64) -> Vec<Entry> {
        (1..=n)
            .map(|i| Entry::new(i, format!("en{i}"), format!("jp{i}")))
            .collect()
    }

    #[test]
    fn full_option_set_has_correct_once() {
        let pool = entries(20);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let correct = &pool[(seed % 20) as usize];
            let opts = build_distractors(correct, &pool, &[], 8, &mut rng);
            assert_eq!(opts.len(), 8);
            assert_eq!(opts.iter().filter(|o| **o == correct.jp).count(), 1);
            let unique: HashSet<&String> = opts.iter().collect();
            assert_eq!(unique.len(), 8, "duplicate option for seed {seed}");
        }
    }

    #[test]
    fn small_pool_yields_fewer_options() {
        let pool = entries(3);
        let mut rng = StdRng::seed_from_u64(1);
        let opts = build_distractors(&pool[0], &pool, &[], 8, &mut rng);
        assert_eq!(opts.len(), 3);
        assert!(opts.contains(&"jp1".to_string()));
    }

    #[test]
    fn duplicate_meanings_collapse() {
        let mut pool = entries(4);
        pool.push(Entry::new(5, "again", "jp2"));
        pool.push(Entry::new(6, "same", "jp1"));
        let mut rng = StdRng::seed_from_u64(9);
        let opts = build_distractors(&pool[0], &pool, &[], 8, &mut rng);
        assert_eq!(opts.len(), 4);
        assert_eq!(opts.iter().filter(|o| *o == "jp1").count(), 1);
    }

    #[test]
    fn empty_pool_falls_back_to_master() {
        let master = entries(12);
        let correct = Entry::new(99, "outside", "範囲外");
        let mut rng = StdRng::seed_from_u64(3);
        let opts = build_distractors(&correct, &[], &master, 8, &mut rng);
        assert_eq!(opts.len(), 8);
        assert!(opts.contains(&"範囲外".to_string()));
    }

    #[test]
    fn correct_value_present_even_without_candidates() {
        let correct = Entry::new(1, "alone", "一人");
        let mut rng = StdRng::seed_from_u64(0);
        let opts = build_distractors(&correct, &[], &[], 8, &mut rng);
        assert_eq!(opts, vec!["一人".to_string()]);
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let pool = entries(30);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            build_distractors(&pool[4], &pool, &[], 8, &mut rng)
        };
        assert_eq!(run(42), run(42));
    }
}
