//! Criterion micro-benchmarks for full capsule collisions and persistence.

use std::hint::black_box;
use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use eddy_bench::{boundary_cells, wall_profile};
use eddy_boundary::ClosureKind;
use eddy_core::{CollisionModel, D2Q5};

/// Benchmark: base collision + regularized closure over 10K D2Q5 cells.
fn bench_capsule_collide(c: &mut Criterion) {
    let wall = wall_profile(&D2Q5, ClosureKind::Regularized).unwrap();
    let mut cells = boundary_cells(&D2Q5, 10_000, 3);

    c.bench_function("capsule_collide_d2q5_10k", |b| {
        b.iter(|| {
            for cell in &mut cells {
                wall.collide(cell);
            }
            black_box(&cells);
        });
    });
}

/// Benchmark: bare base collision, for comparison with the capsule.
fn bench_base_collide(c: &mut Criterion) {
    let wall = wall_profile(&D2Q5, ClosureKind::Regularized).unwrap();
    let mut cells = boundary_cells(&D2Q5, 10_000, 3);

    c.bench_function("base_collide_d2q5_10k", |b| {
        b.iter(|| {
            for cell in &mut cells {
                wall.base().collide(cell);
            }
            black_box(&cells);
        });
    });
}

/// Benchmark: serialize then deserialize one capsule.
fn bench_capsule_codec(c: &mut Criterion) {
    let wall = wall_profile(&D2Q5, ClosureKind::FullRegularized).unwrap();
    let mut restored = wall.clone();

    c.bench_function("capsule_codec_round_trip", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(32);
            wall.serialize(&mut buf).unwrap();
            restored.deserialize(&mut Cursor::new(buf)).unwrap();
            black_box(&restored);
        });
    });
}

criterion_group!(
    benches,
    bench_capsule_collide,
    bench_base_collide,
    bench_capsule_codec
);
criterion_main!(benches);
