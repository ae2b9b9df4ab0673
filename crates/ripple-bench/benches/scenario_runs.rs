//! Criterion benchmarks for whole demonstration runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ripple_bench::{all_scenarios, single_source};

fn bench_hundred_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("hundred_steps");
    group.sample_size(10);
    for scenario in all_scenarios().unwrap() {
        group.bench_function(scenario.name, |b| {
            b.iter(|| black_box(scenario.tank.simulate_steps(100)));
        });
    }
    group.finish();
}

fn bench_full_single_source(c: &mut Criterion) {
    let scenario = single_source().unwrap();
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);
    group.bench_function("single_source", |b| {
        b.iter(|| {
            let mut tank = scenario.tank.clone();
            let out = tank.run(scenario.request).unwrap();
            black_box(out.metrics.peak_amplitude);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hundred_steps, bench_full_single_source);
criterion_main!(benches);
