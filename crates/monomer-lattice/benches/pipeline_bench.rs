//! Encoding and solver benchmarks
//!
//! Keeps every group short enough to run locally in well under a minute.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use monomer_lattice::SingletonConfig;
use monomer_lattice::app::encoder::encode;
use monomer_lattice::domain::hilbert::HilbertSolver;
use monomer_lattice::domain::vector::Vector;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(5))
}

/// Ring of `n` monomers where each domain is made by one monomer and used by the next
fn ring_monomers(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("d{} d{}* d{}", i, (i + 1) % n, i))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let monomers = ring_monomers(1000);

    group.bench_function("ring_1000", |b| {
        b.iter(|| encode(black_box(&monomers), SingletonConfig::default()))
    });

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let none = SingletonConfig {
        include_negative: false,
        include_positive: false,
    };
    let generators: Vec<Vector> = encode(&ring_monomers(6), none).vectors;

    group.bench_function("ring_6", |b| {
        b.iter(|| HilbertSolver::new(black_box(&generators), 6).solve())
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_encode, bench_solve
}

criterion_main!(benches);
