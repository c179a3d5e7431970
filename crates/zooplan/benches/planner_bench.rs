//! Criterion benchmark for whole-plan generation on sampled zoos.
//! Candidate scans are quadratic per run, so enclosure count is the knob.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use zooplan::api::{draw_zoo, generate_runs_with_defaults, ReplayToken, ZooCfg};

fn bench_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner");
    for &enclosures in &[8usize, 32, 128] {
        let cfg = ZooCfg {
            enclosures,
            ..ZooCfg::default()
        };
        group.bench_with_input(
            BenchmarkId::new("generate_runs", enclosures),
            &cfg,
            |b, cfg| {
                b.iter_batched(
                    || draw_zoo(cfg, ReplayToken { seed: 97, index: 0 }),
                    |zoo| generate_runs_with_defaults(&zoo).unwrap(),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
