//! Criterion micro-benchmarks for mode synthesis and the result fingerprint.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use planewave_bench::{reference_modes, reference_profile};
use planewave_engine::{simulate, synthesize, SimConfig};

fn bench_synthesize(c: &mut Criterion) {
    let modes = reference_modes();

    c.bench_function("synthesize_201", |b| {
        b.iter(|| black_box(synthesize(black_box(SimConfig::REFERENCE_ZMAX), &modes)));
    });

    c.bench_function("synthesize_100k", |b| {
        b.iter(|| black_box(synthesize(black_box(100_000), &modes)));
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let sim = simulate(reference_profile(), &reference_modes()).unwrap();

    c.bench_function("fingerprint_201x20100", |b| {
        b.iter(|| black_box(sim.fingerprint()));
    });
}

criterion_group!(benches, bench_synthesize, bench_fingerprint);
criterion_main!(benches);
