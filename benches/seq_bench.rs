//! Benchmark for Seq vs standard Vec.
//!
//! Every Seq operation copies into fresh storage, so the interesting numbers
//! are the per-call overhead over the equivalent in-place Vec work.

use casebox::sequence::Seq;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// appended Benchmark
// =============================================================================

fn benchmark_appended(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("appended");

    for size in [100, 1000, 10000] {
        let sequence: Seq<i32> = (0..size).collect();
        let standard_vector: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Seq", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.appended([black_box(-1)])));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut vector = standard_vector.clone();
                vector.push(black_box(-1));
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// at Benchmark (Random Access)
// =============================================================================

fn benchmark_at(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("at");

    for size in [100, 1000, 10000] {
        let sequence: Seq<i32> = (0..size).collect();
        let length = usize::try_from(size).unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("Seq", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in 0..length {
                    sum += sequence.at(black_box(index)).success().copied().unwrap_or(0);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// mapped Benchmark
// =============================================================================

fn benchmark_mapped(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("mapped");

    for size in [100, 1000, 10000] {
        let sequence: Seq<i64> = (0..size).collect();
        let standard_vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Seq", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.mapped(|value| Ok::<_, ()>(value * 2))));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let doubled: Vec<i64> = standard_vector.iter().map(|value| value * 2).collect();
                black_box(doubled)
            });
        });
    }

    group.finish();
}

// =============================================================================
// sorted Benchmark
// =============================================================================

fn benchmark_sorted(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted");

    for size in [100, 1000, 10000] {
        let sequence: Seq<i32> = (0..size).rev().collect();

        group.bench_with_input(BenchmarkId::new("auto_sorted", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.auto_sorted()));
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.sorted(|left, right| Ok::<_, ()>(left.cmp(right)))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_appended,
    benchmark_at,
    benchmark_mapped,
    benchmark_sorted
);

criterion_main!(benches);
