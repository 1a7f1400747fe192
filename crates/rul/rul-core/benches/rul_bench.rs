//! Benchmark suite for RUL prediction.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rul_core::{optimize_parameters, polynomial_regression, FixedClock, RulEngine};
use rul_spi::{AssetHistory, HealthSample};
use std::sync::Arc;

fn create_history(size: usize, rate: f64) -> Vec<HealthSample> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..size)
        .map(|d| {
            let noise = (d as f64 * 0.7).sin() * 1.5;
            let score = (98.0 - rate * d as f64 + noise).clamp(0.0, 100.0);
            HealthSample::new(start + Duration::days(d as i64), score)
        })
        .collect()
}

fn engine() -> RulEngine {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    RulEngine::default().with_clock(Arc::new(FixedClock::new(now)))
}

fn bench_single_asset(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("SingleAsset");

    for size in [30, 365, 3650].iter() {
        let history = create_history(*size, 0.05);
        group.bench_with_input(BenchmarkId::new("predict", size), &history, |b, history| {
            b.iter(|| engine.predict_asset_rul(black_box("pump-1"), black_box(history)));
        });
    }

    group.finish();
}

fn bench_fleet(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("Fleet");

    for fleet_size in [10, 100, 1000].iter() {
        let assets: Vec<AssetHistory> = (0..*fleet_size)
            .map(|i| AssetHistory::new(format!("asset-{}", i), create_history(180, 0.01 * (i % 50) as f64)))
            .collect();
        group.bench_with_input(BenchmarkId::new("predict", fleet_size), &assets, |b, assets| {
            b.iter(|| engine.predict_fleet_rul(black_box(assets)));
        });
    }

    group.finish();
}

fn bench_calibration(c: &mut Criterion) {
    let scores: Vec<f64> = create_history(365, 0.05)
        .into_iter()
        .map(|s| s.health_score)
        .collect();

    c.bench_function("optimize_parameters/365", |b| {
        b.iter(|| optimize_parameters(black_box(&scores)))
    });
    c.bench_function("polynomial_regression/deg3", |b| {
        b.iter(|| polynomial_regression(black_box(&scores), 3))
    });
}

criterion_group!(benches, bench_single_asset, bench_fleet, bench_calibration);
criterion_main!(benches);
