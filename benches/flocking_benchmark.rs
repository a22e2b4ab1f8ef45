/*
 * Boid Simulation Benchmark
 *
 * This file contains benchmarks for the flocking core to identify performance
 * bottlenecks. It measures the brute-force neighbor query and full ticks in
 * each update mode.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use flocking::neighbors::neighbors;
use flocking::{ParameterSet, Simulation, SimulationConfig, UpdateMode, Vec3};

fn params() -> ParameterSet {
    ParameterSet {
        bounds: Vec3::splat(2.0),
        ..ParameterSet::default()
    }
}

fn simulation(n: usize, mode: UpdateMode, parallel: bool) -> Simulation {
    let config = SimulationConfig {
        agent_count: n,
        seed: Some(42),
        mode,
        parallel,
    };
    Simulation::new(&config, params()).expect("benchmark parameters are valid")
}

// Benchmark one neighbor query per boid
fn bench_neighbor_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_query");

    for num_boids in [100, 500, 1000, 2000].iter() {
        let sim = simulation(*num_boids, UpdateMode::Sequential, false);
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            b.iter(|| {
                let mut total = 0;
                for i in 0..n {
                    total += neighbors(sim.boids(), i, black_box(0.5)).count();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

// Benchmark a full tick in every update mode
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let modes = [
        ("sequential", UpdateMode::Sequential, false),
        ("synchronized", UpdateMode::Synchronized, false),
        ("synchronized_parallel", UpdateMode::Synchronized, true),
    ];

    for num_boids in [100, 500, 1000, 2000].iter() {
        for (name, mode, parallel) in modes {
            group.bench_with_input(BenchmarkId::new(name, num_boids), num_boids, |b, &n| {
                let mut sim = simulation(n, mode, parallel);
                b.iter(|| sim.tick());
            });
        }
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_neighbor_query, bench_tick
}

criterion_main!(benches);
