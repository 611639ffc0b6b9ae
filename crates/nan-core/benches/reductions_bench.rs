//! Benchmarks comparing the scalar and compensated reduction backends

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nan_core::{stats, CompensatedBackend, NanPrimitives, ScalarBackend};

/// Generate test data with roughly one NaN in every `nan_every` elements
fn generate_test_data(size: usize, nan_every: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            if nan_every > 0 && i % nan_every == 0 {
                f64::NAN
            } else {
                (i as f64 * 0.1).sin() * 100.0
            }
        })
        .collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for &size in &[1_000usize, 100_000] {
        let data = generate_test_data(size, 10);

        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(ScalarBackend.sum(data.iter().copied())))
        });
        group.bench_with_input(BenchmarkId::new("compensated", size), &data, |b, data| {
            b.iter(|| black_box(CompensatedBackend.sum(data.iter().copied())))
        });
    }

    group.finish();
}

fn bench_extrema(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrema");

    for &size in &[1_000usize, 100_000] {
        let data = generate_test_data(size, 10);

        group.bench_with_input(BenchmarkId::new("single_pass", size), &data, |b, data| {
            b.iter(|| black_box(ScalarBackend.extrema(data.iter().copied())))
        });
        group.bench_with_input(BenchmarkId::new("min_then_max", size), &data, |b, data| {
            b.iter(|| {
                black_box((
                    ScalarBackend.minimum(data.iter().copied()),
                    ScalarBackend.maximum(data.iter().copied()),
                ))
            })
        });
    }

    group.finish();
}

fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");

    for &size in &[1_000usize, 100_000] {
        let data = generate_test_data(size, 10);

        group.bench_with_input(BenchmarkId::new("var", size), &data, |b, data| {
            b.iter(|| black_box(stats::var(data.iter().copied())))
        });
        group.bench_with_input(BenchmarkId::new("median", size), &data, |b, data| {
            b.iter(|| black_box(stats::median(data.iter().copied())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_extrema, bench_derived);
criterion_main!(benches);
