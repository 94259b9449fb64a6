//! Benchmarks for sparse vector reductions.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use trellis::linalg::parallel::parallel_sum;
use trellis::prelude::*;

/// Generates a vector with every third entry zero.
fn sparse_input(size: usize) -> SparseVector<i64> {
    let dense: Vec<i64> = (0..size)
        .map(|i| if i % 3 == 0 { 0 } else { (i as i64 % 100) - 50 })
        .collect();
    SparseVector::from_dense(&dense)
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_sum");
    let config = ReduceConfig::default();

    for size in [1_000, 100_000, 1_000_000] {
        let v = sparse_input(size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &v, |b, v| {
            b.iter(|| black_box(v.sum()));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &v, |b, v| {
            b.iter(|| black_box(parallel_sum(v, &config)));
        });
    }

    group.finish();
}

criterion_group!(reduce_benches, bench_sum);

criterion_main!(reduce_benches);
