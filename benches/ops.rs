//! Benchmarks for the fixed-size engine operations.
//!
//! Compares three implementations of each operation:
//!
//! 1. The register path the dispatch registry selects for the fixed engines
//! 2. The generic element-wise fallback kernels
//! 3. `ndarray` as an independent baseline
//!
//! The working set is a batch of operand pairs rather than a single pair so
//! each measurement covers more than loop overhead.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::{arr1, arr2, Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadsimd::ops::fallback;
use quadsimd::{Matrix4, Matrix4Engine, Vector4, Vector4Engine};

/// Number of operand pairs per measured iteration.
const BATCH: usize = 1024;

/// Generates reproducible pseudo-random operand batches.
fn vector_batch(seed: u64) -> Vec<(Vector4, Vector4)> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..BATCH)
        .map(|_| {
            let a: Vector4 = (0..4).map(|_| rng.random_range(-100.0f32..100.0)).collect();
            let b: Vector4 = (0..4).map(|_| rng.random_range(-100.0f32..100.0)).collect();
            (a, b)
        })
        .collect()
}

fn matrix_batch(seed: u64) -> Vec<(Matrix4, Matrix4)> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..BATCH)
        .map(|_| {
            let a: Matrix4 = (0..16)
                .map(|_| rng.random_range(-100.0f32..100.0))
                .collect();
            let b: Matrix4 = (0..16)
                .map(|_| rng.random_range(-100.0f32..100.0))
                .collect();
            (a, b)
        })
        .collect()
}

fn bench_vector_add(c: &mut Criterion) {
    let pairs = vector_batch(42);
    let ndarray_pairs: Vec<(Array1<f32>, Array1<f32>)> = pairs
        .iter()
        .map(|(a, b)| {
            (
                arr1(&[a.element(0), a.element(1), a.element(2), a.element(3)]),
                arr1(&[b.element(0), b.element(1), b.element(2), b.element(3)]),
            )
        })
        .collect();

    let mut group = c.benchmark_group("vector_add");

    group.bench_function("register", |bencher| {
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(black_box(*a) + black_box(*b));
            }
        })
    });

    group.bench_function("fallback", |bencher| {
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(fallback::add_vectors::<_, _, Vector4Engine>(
                    black_box(a.engine()),
                    black_box(b.engine()),
                ));
            }
        })
    });

    group.bench_function("ndarray", |bencher| {
        bencher.iter(|| {
            for (a, b) in &ndarray_pairs {
                black_box(black_box(a) + black_box(b));
            }
        })
    });

    group.finish();
}

fn bench_matrix_add(c: &mut Criterion) {
    let pairs = matrix_batch(7);

    let mut group = c.benchmark_group("matrix_add");

    group.bench_function("register", |bencher| {
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(black_box(*a) + black_box(*b));
            }
        })
    });

    group.bench_function("fallback", |bencher| {
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(fallback::add_matrices::<_, _, Matrix4Engine>(
                    black_box(a.engine()),
                    black_box(b.engine()),
                ));
            }
        })
    });

    group.finish();
}

fn bench_matrix_mul(c: &mut Criterion) {
    let pairs = matrix_batch(13);
    let ndarray_pairs: Vec<(Array2<f32>, Array2<f32>)> = pairs
        .iter()
        .map(|(a, b)| {
            let to_arr = |m: &Matrix4| {
                arr2(&[
                    [
                        m.element(0, 0),
                        m.element(0, 1),
                        m.element(0, 2),
                        m.element(0, 3),
                    ],
                    [
                        m.element(1, 0),
                        m.element(1, 1),
                        m.element(1, 2),
                        m.element(1, 3),
                    ],
                    [
                        m.element(2, 0),
                        m.element(2, 1),
                        m.element(2, 2),
                        m.element(2, 3),
                    ],
                    [
                        m.element(3, 0),
                        m.element(3, 1),
                        m.element(3, 2),
                        m.element(3, 3),
                    ],
                ])
            };
            (to_arr(a), to_arr(b))
        })
        .collect();

    let mut group = c.benchmark_group("matrix_mul");

    group.bench_function("dispatch", |bencher| {
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(black_box(*a) * black_box(*b));
            }
        })
    });

    group.bench_function("fallback", |bencher| {
        bencher.iter(|| {
            for (a, b) in &pairs {
                black_box(fallback::multiply_matrices::<_, _, Matrix4Engine>(
                    black_box(a.engine()),
                    black_box(b.engine()),
                ));
            }
        })
    });

    group.bench_function("ndarray", |bencher| {
        bencher.iter(|| {
            for (a, b) in &ndarray_pairs {
                black_box(black_box(a).dot(black_box(b)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_vector_add, bench_matrix_add, bench_matrix_mul);
criterion_main!(benches);
