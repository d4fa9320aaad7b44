//! Criterion benchmarks for ds-series.
//!
//! Compares the dense and sparse layouts for construction, point lookup,
//! iteration and inner joins across different series lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ds_series::{BuildOptions, DateDoubleSeries, Representation, SeriesBuilder};
use ds_time::Date;

/// Business-day entries starting Monday 2015-01-05.
fn generate_entries(n: usize) -> Vec<(Date, f64)> {
    let mut d = Date::from_ymd(2015, 1, 5).unwrap();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push((d, 100.0 + (i as f64 * 0.01).sin()));
        d = d + 1;
        while d.is_weekend() {
            d = d + 1;
        }
    }
    out
}

fn build(entries: &[(Date, f64)], representation: Representation) -> DateDoubleSeries {
    SeriesBuilder::new()
        .with_options(BuildOptions::new().with_representation(representation))
        .unwrap()
        .put_entries(entries.iter().copied())
        .build()
}

const LAYOUTS: [(&str, Representation); 2] = [
    ("dense", Representation::Dense),
    ("sparse", Representation::Sparse),
];

/// Benchmark builder construction.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 1000, 10000] {
        let entries = generate_entries(size);
        for (name, layout) in LAYOUTS {
            group.bench_with_input(BenchmarkId::new(name, size), &entries, |b, entries| {
                b.iter(|| build(black_box(entries), layout));
            });
        }
    }

    group.finish();
}

/// Benchmark point lookup (100 dates spread over the series).
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_100");

    for size in [100, 1000, 10000] {
        let entries = generate_entries(size);
        let probes: Vec<Date> = (0..100).map(|i| entries[i * size / 100].0).collect();
        for (name, layout) in LAYOUTS {
            let series = build(&entries, layout);
            group.bench_with_input(BenchmarkId::new(name, size), &series, |b, series| {
                b.iter(|| {
                    for &d in &probes {
                        let _ = series.get(black_box(d));
                    }
                });
            });
        }
    }

    group.finish();
}

/// Benchmark a full pass over the points.
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [1000, 10000] {
        let entries = generate_entries(size);
        for (name, layout) in LAYOUTS {
            let series = build(&entries, layout);
            group.bench_with_input(BenchmarkId::new(name, size), &series, |b, series| {
                b.iter(|| series.values().sum::<f64>());
            });
        }
    }

    group.finish();
}

/// Benchmark the inner join of two overlapping series.
fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_with");

    for size in [1000, 10000] {
        let entries = generate_entries(size);
        let shifted = &entries[size / 2..];
        for (name, layout) in LAYOUTS {
            let left = build(&entries, layout);
            let right = build(shifted, layout);
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &(&left, &right),
                |b, (left, right)| {
                    b.iter(|| left.combine_with(black_box(right), |l, r| l - r));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_lookup,
    bench_iteration,
    bench_combine
);
criterion_main!(benches);
