//! Benchmarks for name matching and keyword queries.

use cardbox_search::{
    DEFAULT_FUZZY_THRESHOLD, KeywordQuery, levenshtein_distance, matches_keyword,
    matching_positions,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_test_names(count: usize) -> Vec<String> {
    const FIRST: [&str; 8] = [
        "Alice", "Ben", "Carla", "Dmitri", "Elena", "Fatima", "George", "Hana",
    ];
    const LAST: [&str; 8] = [
        "Tan", "Carter", "Reyes", "Volkov", "Tanaka", "Sayed", "Best", "Sato",
    ];

    (0..count)
        .map(|i| format!("{} {}", FIRST[i % FIRST.len()], LAST[(i / FIRST.len()) % LAST.len()]))
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("levenshtein_single", |b| {
        b.iter(|| levenshtein_distance(black_box("charlotte"), black_box("charlie")))
    });
}

fn bench_token_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_match");

    // One hit at each rung of the matcher ladder, plus a full miss
    group.bench_function("exact_word", |b| {
        b.iter(|| {
            matches_keyword(
                black_box("Tanaka"),
                black_box("tanaka"),
                DEFAULT_FUZZY_THRESHOLD,
            )
        })
    });

    group.bench_function("substring", |b| {
        b.iter(|| {
            matches_keyword(
                black_box("Tanaka"),
                black_box("tan"),
                DEFAULT_FUZZY_THRESHOLD,
            )
        })
    });

    group.bench_function("fuzzy", |b| {
        b.iter(|| {
            matches_keyword(
                black_box("Tanaka"),
                black_box("tanaki"),
                DEFAULT_FUZZY_THRESHOLD,
            )
        })
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            matches_keyword(
                black_box("Tanaka"),
                black_box("volkov"),
                DEFAULT_FUZZY_THRESHOLD,
            )
        })
    });

    group.finish();
}

fn bench_filter_names(c: &mut Criterion) {
    let query = KeywordQuery::new(vec!["tanka".to_string()]).unwrap();
    let mut group = c.benchmark_group("filter_names");

    for size in [10, 100, 1000, 10000].iter() {
        let names = create_test_names(*size);

        group.bench_with_input(BenchmarkId::new("positions", size), size, |b, _| {
            b.iter(|| matching_positions(black_box(&query), black_box(&names)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_token_strategies,
    bench_filter_names
);
criterion_main!(benches);
