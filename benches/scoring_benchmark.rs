//! Benchmarks for the scoring engine.

use cloud_db_advisor::{AppConfig, ScoringEngine, evaluate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_recommend(c: &mut Criterion) {
    let engine = ScoringEngine::new(1000.0, 100.0, 5.0, 5.0, 5.0).expect("valid inputs");

    c.bench_function("recommend", |b| {
        b.iter(|| black_box(&engine).recommend());
    });

    c.bench_function("all_metrics", |b| {
        b.iter(|| black_box(&engine).all_metrics());
    });
}

fn benchmark_engine_construction(c: &mut Criterion) {
    c.bench_function("engine_new", |b| {
        b.iter(|| {
            ScoringEngine::new(
                black_box(2500.0),
                black_box(40.0),
                black_box(2.0),
                black_box(6.0),
                black_box(2.0),
            )
        });
    });
}

fn benchmark_full_evaluation(c: &mut Criterion) {
    let config = AppConfig::default();
    c.bench_function("evaluate_default_config", |b| {
        b.iter(|| evaluate(black_box(&config)));
    });
}

criterion_group!(
    benches,
    benchmark_recommend,
    benchmark_engine_construction,
    benchmark_full_evaluation
);
criterion_main!(benches);
