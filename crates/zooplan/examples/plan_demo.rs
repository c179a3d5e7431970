//! Plan a sampled zoo and print what the drone achieves.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how many enclosures
//!   does the greedy planner feed on a medium layout, and how fast?"
//!
//! Why this shape
//! - One `ZooCfg` draw with a fixed replay token, so repeated invocations
//!   print identical plans and timings stay comparable.

use std::time::Instant;

use zooplan::api::{draw_zoo, fed_importance, generate_runs_with_defaults, ReplayToken, ZooCfg};

fn main() {
    let cfg = ZooCfg {
        enclosures: 40,
        dead_zones: 6,
        ..ZooCfg::default()
    };
    let zoo = draw_zoo(&cfg, ReplayToken { seed: 2024, index: 0 });

    let start = Instant::now();
    let runs = generate_runs_with_defaults(&zoo).expect("sampled zoo is valid");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    let fed: usize = runs.iter().map(|r| r.fed.len()).sum();
    println!(
        "enclosures={} storages={} dead_zones={}",
        zoo.enclosures.len(),
        zoo.storages.len(),
        zoo.dead_zones.len()
    );
    println!(
        "runs={} fed={} fed_importance={:.3}",
        runs.len(),
        fed,
        fed_importance(&zoo, &runs)
    );
    for (i, run) in runs.iter().enumerate() {
        println!("run_{i} stops={} distance={:.3}", run.path.len() - 2, run.distance);
    }
    println!("plan_time_ms={elapsed:.3}");
}
