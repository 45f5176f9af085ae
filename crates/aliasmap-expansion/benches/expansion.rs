//! Expansion throughput over a synthetic key universe

use aliasmap_expansion::{ExpansionStrategy, FixedPointStrategy, SinglePassStrategy};
use aliasmap_test_utils::{synthetic_aliases, synthetic_keys};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_single_pass(c: &mut Criterion) {
    let keys = synthetic_keys(12);
    let aliases = synthetic_aliases(12);

    let mut group = c.benchmark_group("single_pass");
    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                SinglePassStrategy::new()
                    .expand(black_box(&aliases), black_box(&keys), workers)
                    .map(|outcome| outcome.pairs.len())
            });
        });
    }
    group.finish();
}

fn bench_fixed_point(c: &mut Criterion) {
    let keys = synthetic_keys(12);
    let aliases = synthetic_aliases(12);

    c.bench_function("fixed_point/4", |b| {
        b.iter(|| {
            FixedPointStrategy::new(8)
                .expand(black_box(&aliases), black_box(&keys), 4)
                .map(|outcome| outcome.pairs.len())
        });
    });
}

criterion_group!(benches, bench_single_pass, bench_fixed_point);
criterion_main!(benches);
