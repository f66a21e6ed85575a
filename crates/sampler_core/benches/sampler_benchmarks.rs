//! Criterion benchmarks for the sampler_core Monte Carlo kernel.
//!
//! Benchmarks cover:
//! - RNG generation (single and batch uniform draws)
//! - Quarter-circle hit counting at varying sample counts
//! - End-to-end π estimation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::mc::{count_inside, PiEstimator, SamplerConfig};
use sampler_core::rng::SamplerRng;

/// Benchmark RNG generation (foundation for the sampling loop).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("uniform_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SamplerRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_uniform();
                    }
                    black_box(sum)
                });
            },
        );
    }

    // Batch generation (more efficient)
    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("uniform_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SamplerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_uniform(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the hit-counting kernel with varying sample counts.
fn bench_count_inside(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_inside");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("quarter_circle", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SamplerRng::from_seed(42);
                b.iter(|| black_box(count_inside(&mut rng, n)));
            },
        );
    }

    group.finish();
}

/// Benchmark end-to-end estimation including result aggregation.
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    group.sample_size(50); // Reduce sample size for slower benchmarks

    for n_samples in [10_000, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("pi_estimate", n_samples),
            &n_samples,
            |b, &n| {
                let config = SamplerConfig::builder()
                    .n_samples(n)
                    .seed(42)
                    .build()
                    .unwrap();
                let mut estimator = PiEstimator::new(config).unwrap();
                b.iter(|| {
                    estimator.reset();
                    black_box(estimator.estimate())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_count_inside,
    bench_estimate
);
criterion_main!(benches);
