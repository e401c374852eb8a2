use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tango_core::answer::normalize;
use tango_core::{build_distractors, build_quiz, filter_pool, prepare_choices, Direction, Entry};

fn master(n: i64) -> Vec<Entry> {
    (1..=n)
        .map(|i| Entry::new(i, format!("word number {i}"), format!("単語{i}")))
        .collect()
}

fn bench_build_quiz(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_quiz");
    let master = master(1900);
    let pool = filter_pool(&master, 1, 1900);

    group.bench_function("50_of_1900", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| build_quiz(black_box(&pool), 50, false, true, Direction::Random, &mut rng))
    });

    group.bench_function("1900_with_duplicates", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| build_quiz(black_box(&pool), 1900, true, true, Direction::JpToEn, &mut rng))
    });

    group.bench_function("prepare_choices_100", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            let quiz = build_quiz(&pool, 100, false, true, Direction::EnToJp, &mut rng);
            prepare_choices(quiz, black_box(&pool), &master, 8, &mut rng)
        })
    });

    group.finish();
}

fn bench_distractors(c: &mut Criterion) {
    let mut group = c.benchmark_group("distractors");
    let master = master(1900);
    let small = filter_pool(&master, 1, 20);
    let full = filter_pool(&master, 1, 1900);

    group.bench_function("pool_20", |b| {
        let mut rng = StdRng::seed_from_u64(4);
        b.iter(|| build_distractors(&master[0], black_box(small.entries()), &master, 8, &mut rng))
    });

    group.bench_function("pool_1900", |b| {
        let mut rng = StdRng::seed_from_u64(5);
        b.iter(|| build_distractors(&master[0], black_box(full.entries()), &master, 8, &mut rng))
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  \u{201C}Take   Care\tOF\u{201D} ")))
    });
}

criterion_group!(benches, bench_build_quiz, bench_distractors, bench_normalize);
criterion_main!(benches);
