//! Benchmark for vtsim simulation, overlay and Monte Carlo throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vtsim::core::types::{ModelParameters, OverlayConfig};
use vtsim::indicators::realized_volatility;
use vtsim::portfolio::monte_carlo::{simulate_vt_volatility, MonteCarloConfig};
use vtsim::portfolio::VolTargetOverlay;
use vtsim::simulation::simulate_path;

/// Generate a deterministic oscillating price path.
fn generate_sample_path(n: usize) -> Vec<f64> {
    let mut path = vec![100.0; n];
    for i in 1..n {
        path[i] = path[i - 1] * (1.0 + (i as f64 * 0.37).sin() * 0.01);
    }
    path
}

fn bench_simulate_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_path");
    let params = ModelParameters {
        vov: 0.5,
        ..ModelParameters::default()
    };

    for steps in [252, 1260, 5040].iter() {
        group.bench_with_input(BenchmarkId::new("steps", steps), steps, |b, &steps| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let paths = simulate_path(100.0, black_box(&params), black_box(steps), &mut rng);
                black_box(paths)
            });
        });
    }

    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("vol_target_overlay");
    let overlay = VolTargetOverlay::new(OverlayConfig::default()).unwrap();

    for size in [253, 1261, 5041].iter() {
        group.bench_with_input(BenchmarkId::new("path_len", size), size, |b, &size| {
            let path = generate_sample_path(size);
            b.iter(|| {
                let managed = overlay.calculate(black_box(&path));
                black_box(managed)
            });
        });
    }

    group.finish();
}

fn bench_realized_volatility(c: &mut Criterion) {
    let path = generate_sample_path(253);
    c.bench_function("realized_volatility_253", |b| {
        b.iter(|| black_box(realized_volatility(black_box(&path))))
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(10);

    let params = ModelParameters {
        vov: 0.5,
        ..ModelParameters::default()
    };
    let overlay = OverlayConfig::default();

    for trials in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("trials", trials), trials, |b, &trials| {
            let config = MonteCarloConfig {
                n_trials: trials,
                seed: Some(42),
                ..MonteCarloConfig::default()
            };
            b.iter(|| black_box(simulate_vt_volatility(&params, &overlay, &config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_simulate_path,
    bench_overlay,
    bench_realized_volatility,
    bench_monte_carlo
);
criterion_main!(benches);
