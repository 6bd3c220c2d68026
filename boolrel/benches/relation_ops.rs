//! Benchmarks for the hot relation operations

use boolrel::SparseRelation;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const USERS: usize = 10_000;
const ITEMS: usize = 5_000;

fn build_relation(entries: usize, seed: u64) -> SparseRelation {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..entries)
        .map(|_| (rng.gen_range(0..USERS), rng.gen_range(0..ITEMS)))
        .collect()
}

fn bench_cell_access(c: &mut Criterion) {
    let relation = build_relation(100_000, 1);
    let mut rng = StdRng::seed_from_u64(2);
    let probes: Vec<(usize, usize)> = (0..10_000)
        .map(|_| (rng.gen_range(0..USERS * 2), rng.gen_range(0..ITEMS)))
        .collect();

    c.bench_function("get_10k", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|&&(row, col)| relation.get(black_box(row), black_box(col)))
                .count()
        })
    });

    c.bench_function("set_10k", |b| {
        b.iter(|| {
            let mut relation = SparseRelation::new();
            for &(row, col) in &probes {
                relation.set(row, col, true);
            }
            relation
        })
    });
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    for entries in [10_000, 100_000] {
        let relation = build_relation(entries, 3);
        let other = build_relation(entries, 4);

        group.bench_with_input(BenchmarkId::new("transpose", entries), &relation, |b, r| {
            b.iter(|| r.transpose())
        });
        group.bench_with_input(BenchmarkId::new("overlap", entries), &relation, |b, r| {
            b.iter(|| r.overlap(black_box(&other)))
        });
        group.bench_with_input(
            BenchmarkId::new("remove_columns", entries),
            &relation,
            |b, r| {
                let targets: Vec<usize> = (0..ITEMS).step_by(7).collect();
                b.iter(|| {
                    let mut relation = r.clone();
                    relation.remove_columns(&targets);
                    relation
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_cell_access, bench_transforms);
criterion_main!(benches);
