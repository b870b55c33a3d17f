//! Per-call cost of the counter reads against a wall-clock baseline.

use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsc_bench::{bench_end, bench_start, overhead_with_trials};

fn bench_counter_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_reads");

    // Wall clock as the contrasting baseline the cycle counter undercuts
    group.bench_function("instant_now", |b| {
        b.iter(|| black_box(Instant::now()));
    });

    group.bench_function("bench_start", |b| {
        b.iter(|| black_box(bench_start()));
    });

    group.bench_function("bench_end", |b| {
        b.iter(|| black_box(bench_end()));
    });

    group.finish();
}

fn bench_calibration(c: &mut Criterion) {
    let mut group = c.benchmark_group("calibration");
    group.sample_size(20);

    // Reduced trial count keeps the bench short; the loop body is what
    // matters for throughput here, not the convergence quality.
    group.bench_function("overhead_1k_trials", |b| {
        b.iter(|| black_box(overhead_with_trials(1_000)));
    });

    group.finish();
}

criterion_group!(benches, bench_counter_reads, bench_calibration);
criterion_main!(benches);
