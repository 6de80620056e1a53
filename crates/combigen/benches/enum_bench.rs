//! Criterion microbenches for the enumeration hot paths.
//!
//! - Full permutation sweep (successor + suffix reversal throughput).
//! - Combination sweep in the middle of Pascal's triangle.
//! - Odometer sweep over a wide mixed-radix space.
//! - Distinct-tuple search with heavy backtracking (overlapping sets).
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use combigen::prelude::*;

fn sweep<P: CombinatorialPort>(mut port: P) -> usize {
    let mut count = 0;
    while port.take_next().is_some() {
        count += 1;
    }
    count
}

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutations");
    for n in [6usize, 8] {
        group.bench_function(BenchmarkId::new("sweep", n), |b| {
            b.iter_batched(
                || Permutations::new(n),
                |port| sweep(port),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinations");
    for (n, k) in [(16usize, 8usize), (20, 10)] {
        group.bench_function(BenchmarkId::new("sweep", format!("{n}_{k}")), |b| {
            b.iter_batched(
                || Combinations::new(n, k).unwrap(),
                |port| sweep(port),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_tuples(c: &mut Criterion) {
    let mut group = c.benchmark_group("tuples");
    group.bench_function(BenchmarkId::new("sweep", "6x5x4x3x2"), |b| {
        b.iter_batched(
            || Tuples::new(vec![6, 5, 4, 3, 2]),
            |port| sweep(port),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_distinct_tuples(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_tuples");
    // Five positions competing for seven values forces dense backtracking.
    let sets: Vec<Vec<usize>> = (0..5).map(|_| (0..7).collect()).collect();
    group.bench_function(BenchmarkId::new("sweep", "5_of_7_overlapping"), |b| {
        b.iter_batched(
            || DistinctTuples::new(sets.clone()),
            |port| sweep(port),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_permutations,
    bench_combinations,
    bench_tuples,
    bench_distinct_tuples
);
criterion_main!(benches);
