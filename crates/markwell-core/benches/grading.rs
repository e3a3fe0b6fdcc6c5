use criterion::{black_box, criterion_group, criterion_main, Criterion};

use markwell_core::distance::edit_distance;
use markwell_core::evaluate::evaluate;
use markwell_core::model::QuestionType;
use markwell_core::normalize::normalize;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("short", |b| {
        b.iter(|| normalize(black_box("  The Capital, of FRANCE!  ")))
    });

    let long = "The quick brown fox; jumps over: the lazy dog! ".repeat(50);
    group.bench_function("long", |b| b.iter(|| normalize(black_box(&long))));

    group.finish();
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");

    group.bench_function("len=5", |b| {
        b.iter(|| edit_distance(black_box("paris"), black_box("parts")))
    });

    let a = "photosynthesis in chloroplasts".repeat(4);
    let b_str = "photosinthesis in cloroplasts".repeat(4);
    group.bench_function("len=120", |b| {
        b.iter(|| edit_distance(black_box(&a), black_box(&b_str)))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let accepted = vec!["Paris".to_string()];
    group.bench_function("short_answer", |b| {
        b.iter(|| {
            evaluate(
                black_box(Some("paris")),
                black_box(&accepted),
                QuestionType::ShortAnswer,
                5,
            )
        })
    });

    let list: Vec<String> = (0..20).map(|i| format!("item-{i}")).collect();
    let response = "item-3, item-7, item-11, item-19, item-99";
    group.bench_function("list_based_20_items", |b| {
        b.iter(|| {
            evaluate(
                black_box(Some(response)),
                black_box(&list),
                QuestionType::ListBased,
                20,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_edit_distance, bench_evaluate);
criterion_main!(benches);
