//! Bucket conversion benchmarks
//!
//! Run with: cargo bench --bench add_buckets

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use experiment_views::domain::{Bucket, ExperimentState};
use experiment_views::view::ExperimentView;

const SIZES: [usize; 3] = [2, 16, 1_000];

/// Benchmark converting domain buckets into bucket views
fn bench_add_buckets(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_buckets");

    for size in SIZES {
        let buckets: Vec<Bucket> = (0..size)
            .map(|i| Bucket::new("exp", format!("bucket-{i}"), 1.0 / size as f64, i == 0))
            .collect();
        let mut view =
            ExperimentView::new("exp", ExperimentState::Running, None, "app", None).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &buckets, |b, buckets| {
            b.iter(|| view.add_buckets(black_box(buckets)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_buckets);
criterion_main!(benches);
