//! Criterion benchmarks for the activation simulator.
//!
//! Run with:
//!   cargo bench -p neurovis
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use neurovis::prelude::*;

fn make_sim(neurons: usize) -> ActivationSimulator {
    ActivationSimulator::new(&WidgetConfig::with_neurons(neurons).with_seed(42))
}

/// Benchmark tick() with the grid sizes hosts actually use.
fn bench_tick_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_size");

    for size in [12usize, 25, 256].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("tick", size), size, |b, &size| {
            let mut sim = make_sim(size);
            b.iter(|| {
                sim.tick();
                black_box(sim.grid().mean_intensity())
            });
        });
    }

    group.finish();
}

/// Benchmark the per-frame render path.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("snapshot_25", |b| {
        let mut sim = make_sim(25);
        sim.set_gain(3.0);
        sim.tick();

        b.iter(|| black_box(sim.snapshot()));
    });

    group.bench_function("classify", |b| {
        let params = SimulationParameters::new(2.6, 10.0);

        b.iter(|| black_box(classify(black_box(&params))));
    });

    group.finish();
}

criterion_group!(benches, bench_tick_sizes, bench_render);

criterion_main!(benches);
