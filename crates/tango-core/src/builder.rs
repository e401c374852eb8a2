//! Quiz sampling from a pool.
//!
//! All randomness is injected through `&mut impl Rng` so callers can pass a
//! seeded `StdRng` and get reproducible quizzes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::distractor::{build_distractors, DEFAULT_CHOICES};
use crate::model::{Direction, Entry, QuestionDirection, Quiz, QuizItem};
use crate::pool::{clamp_count, Pool};

/// Build the RNG for one session: seeded when a seed is given, otherwise from entropy.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Sampling policy for a quiz build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Requested number of questions. Negative values build nothing.
    pub count: i64,
    /// Draw with replacement.
    pub allow_duplicates: bool,
    /// Shuffle the drawn sequence.
    pub shuffle: bool,
    pub direction: Direction,
    /// Options per multiple-choice question.
    pub choices: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            count: 50,
            allow_duplicates: false,
            shuffle: true,
            direction: Direction::JpToEn,
            choices: DEFAULT_CHOICES,
        }
    }
}

fn resolve_direction<R: Rng + ?Sized>(direction: Direction, rng: &mut R) -> QuestionDirection {
    match direction {
        Direction::JpToEn => QuestionDirection::JpToEn,
        Direction::EnToJp => QuestionDirection::EnToJp,
        Direction::Random => {
            if rng.gen_bool(0.5) {
                QuestionDirection::JpToEn
            } else {
                QuestionDirection::EnToJp
            }
        }
    }
}

/// Draw a quiz of `requested_count` items from `pool`.
///
/// Without duplicates the quiz holds `min(requested_count, pool.len())`
/// distinct entries; with duplicates it holds exactly `requested_count`
/// independent draws. Counts above [`MAX_QUESTIONS`](crate::pool::MAX_QUESTIONS)
/// are clamped to it.
pub fn build_quiz<R: Rng + ?Sized>(
    pool: &Pool,
    requested_count: i64,
    allow_duplicates: bool,
    shuffle: bool,
    direction: Direction,
    rng: &mut R,
) -> Quiz {
    let entries = pool.entries();
    let requested = clamp_count(requested_count);
    if entries.is_empty() || requested == 0 {
        return Quiz::default();
    }

    let picks: Vec<Entry> = if allow_duplicates {
        let mut picks: Vec<Entry> = (0..requested)
            .map(|_| entries[rng.gen_range(0..entries.len())].clone())
            .collect();
        if shuffle {
            picks.shuffle(rng);
        }
        picks
    } else {
        let mut picks = entries.to_vec();
        if shuffle {
            picks.shuffle(rng);
        }
        picks.truncate(requested);
        picks
    };

    let items = picks
        .into_iter()
        .map(|entry| {
            let resolved = resolve_direction(direction, rng);
            QuizItem::new(entry, resolved)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        questions = items.len(),
        allow_duplicates,
        shuffle,
        %direction,
        "built quiz"
    );
    Quiz::new(items)
}

/// Build a quiz from `settings`.
pub fn build_with_settings<R: Rng + ?Sized>(
    pool: &Pool,
    settings: &QuizSettings,
    rng: &mut R,
) -> Quiz {
    build_quiz(
        pool,
        settings.count,
        settings.allow_duplicates,
        settings.shuffle,
        settings.direction,
        rng,
    )
}

/// Attach multiple-choice options to every `EnToJp` item that has none.
///
/// Items that already carry options keep them, so a quiz can be passed
/// through here any number of times without reshuffling its choices.
pub fn prepare_choices<R: Rng + ?Sized>(
    quiz: Quiz,
    pool: &Pool,
    master: &[Entry],
    k: usize,
    rng: &mut R,
) -> Quiz {
    let items = quiz
        .into_items()
        .into_iter()
        .map(|mut item| {
            if item.direction == QuestionDirection::EnToJp && item.options.is_none() {
                item.options = Some(build_distractors(
                    &item.entry,
                    pool.entries(),
                    master,
                    k,
                    rng,
                ));
            }
            item
        })
        .collect();
    Quiz::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{filter_pool, MAX_QUESTIONS};
    use std::collections::HashSet;

    fn pool_of(n: i64) -> Pool {
        let master: Vec<Entry> = (1..=n)
            .map(|i| Entry::new(i, format!("en{i}"), format!("jp{i}")))
            .collect();
        filter_pool(&master, 1, n)
    }

    #[test]
    fn empty_pool_builds_nothing() {
        let mut rng = session_rng(Some(1));
        let quiz = build_quiz(&Pool::default(), 10, true, true, Direction::Random, &mut rng);
        assert!(quiz.is_empty());
    }

    #[test]
    fn non_positive_count_builds_nothing() {
        let pool = pool_of(5);
        let mut rng = session_rng(Some(1));
        for count in [0, -1, -100] {
            for dup in [false, true] {
                let quiz = build_quiz(&pool, count, dup, true, Direction::JpToEn, &mut rng);
                assert!(quiz.is_empty(), "count {count} dup {dup}");
            }
        }
    }

    #[test]
    fn huge_count_is_clamped_to_max_questions() {
        let pool = pool_of(3);
        let mut rng = session_rng(Some(1));
        let quiz = build_quiz(&pool, i64::MAX, true, false, Direction::JpToEn, &mut rng);
        assert_eq!(quiz.len(), MAX_QUESTIONS);

        let quiz = build_quiz(&pool, i64::MAX, false, true, Direction::JpToEn, &mut rng);
        assert_eq!(quiz.len(), 3);
    }

    #[test]
    fn without_duplicates_length_is_clamped_and_distinct() {
        let pool = pool_of(12);
        for (count, shuffle) in [(5, true), (12, false), (40, true), (1, false)] {
            let mut rng = session_rng(Some(count as u64));
            let quiz = build_quiz(&pool, count, false, shuffle, Direction::JpToEn, &mut rng);
            assert_eq!(quiz.len(), (count as usize).min(12));
            let nos: HashSet<i64> = quiz.iter().map(|i| i.entry.no).collect();
            assert_eq!(nos.len(), quiz.len());
        }
    }

    #[test]
    fn unshuffled_prefix_keeps_pool_order() {
        let pool = pool_of(10);
        let mut rng = session_rng(Some(5));
        let quiz = build_quiz(&pool, 4, false, false, Direction::EnToJp, &mut rng);
        let nos: Vec<i64> = quiz.iter().map(|i| i.entry.no).collect();
        assert_eq!(nos, vec![1, 2, 3, 4]);
        assert!(quiz
            .iter()
            .all(|i| i.direction == QuestionDirection::EnToJp));
    }

    #[test]
    fn with_duplicates_length_is_exact() {
        let pool = pool_of(3);
        let mut rng = session_rng(Some(11));
        let quiz = build_quiz(&pool, 25, true, true, Direction::JpToEn, &mut rng);
        assert_eq!(quiz.len(), 25);
        assert!(quiz.iter().all(|i| (1..=3).contains(&i.entry.no)));
    }

    #[test]
    fn random_direction_resolves_to_both() {
        let pool = pool_of(200);
        let mut rng = session_rng(Some(2024));
        let quiz = build_quiz(&pool, 200, false, true, Direction::Random, &mut rng);
        let jp2en = quiz
            .iter()
            .filter(|i| i.direction == QuestionDirection::JpToEn)
            .count();
        assert!(jp2en > 50 && jp2en < 150, "suspicious split: {jp2en}/200");
    }

    #[test]
    fn same_seed_same_quiz() {
        let pool = pool_of(50);
        let build = |seed| {
            let mut rng = session_rng(Some(seed));
            build_quiz(&pool, 20, false, true, Direction::Random, &mut rng)
        };
        assert_eq!(build(7), build(7));
        assert_ne!(build(7), build(8));
    }

    #[test]
    fn prepare_choices_only_touches_en2jp_once() {
        let pool = pool_of(20);
        let mut rng = session_rng(Some(3));
        let quiz = build_quiz(&pool, 20, false, true, Direction::Random, &mut rng);
        let prepared = prepare_choices(quiz, &pool, &[], 8, &mut rng);

        for item in &prepared {
            match item.direction {
                QuestionDirection::JpToEn => assert!(item.options.is_none()),
                QuestionDirection::EnToJp => {
                    assert_eq!(item.choices().len(), 8);
                    assert!(item.correct_choice().is_some());
                }
            }
        }

        let again = prepare_choices(prepared.clone(), &pool, &[], 8, &mut rng);
        assert_eq!(again, prepared);
    }

    #[test]
    fn settings_default_is_eight_choice_shuffled() {
        let settings = QuizSettings::default();
        assert_eq!(settings.choices, 8);
        assert!(settings.shuffle);
        assert!(!settings.allow_duplicates);
    }
}
