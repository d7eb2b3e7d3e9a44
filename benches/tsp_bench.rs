//! Criterion benchmarks for the TSP solvers.
//!
//! Instances are points on a jittered circle so that every size has a known
//! good tour and comparable structure.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tsp::aco::{AcoConfig, AcoRunner};
use u_tsp::exact::BruteForceRunner;
use u_tsp::geometry::DistanceMatrix;
use u_tsp::random::create_rng;

fn jittered_circle(n: usize) -> DistanceMatrix {
    let mut rng = create_rng(n as u64);
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            let r = 1.0 + rng.random_range(-0.1..0.1);
            (r * theta.cos(), r * theta.sin())
        })
        .collect();
    DistanceMatrix::from_coords(&coords).expect("valid coordinates")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");

    for &n in &[50usize, 200, 1000] {
        let coords: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, (i * i % 97) as f64)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &coords, |b, coords| {
            b.iter(|| black_box(DistanceMatrix::from_coords(black_box(coords))))
        });
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for (n, ants, gens) in [(20usize, 20usize, 50usize), (50, 30, 30), (100, 50, 20)] {
        let distances = jittered_circle(n);
        let config = AcoConfig::default()
            .with_ants(ants)
            .with_generations(gens)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_a{}_g{}", n, ants, gens), n),
            &(distances, config),
            |b, (d, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(d), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(10);

    for &n in &[6usize, 8, 10] {
        let distances = jittered_circle(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &distances, |b, d| {
            b.iter(|| black_box(BruteForceRunner::run(black_box(d))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance_matrix, bench_aco, bench_brute_force);
criterion_main!(benches);
