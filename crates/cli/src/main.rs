use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use zooplan::api::{
    check_run, draw_zoo, fed_importance, generate_runs_with_defaults, FlightCfg, PlanError, Point,
    ReplayToken, Zoo, ZooCfg,
};

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Zoo feeding-drone route planner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan feeding runs for a zoo file and write the paths file
    Plan {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Re-validate a paths file against a zoo file
    Check {
        #[arg(long)]
        zoo: String,
        #[arg(long)]
        paths: String,
    },
    /// Draw a random zoo layout and write it in the input format
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
}

fn main() {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let result = match cmd.action {
        Action::Plan { input, out } => plan(input, out),
        Action::Check { zoo, paths } => check(zoo, paths),
        Action::Sample { seed, index, out } => sample(seed, index, out),
    };
    if let Err(err) = result {
        tracing::error!("{err:#}");
        std::process::exit(exit_code(&err));
    }
}

/// Distinct exit statuses so wrappers can tell I/O trouble (2), malformed
/// input (3), and internal corruption (4) apart.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PlanError>() {
        Some(PlanError::InvalidZoo(_)) => return 3,
        Some(PlanError::StateCorruption(_)) => return 4,
        None => {}
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return 2;
    }
    1
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn plan(input: String, out: String) -> Result<()> {
    tracing::info!(input, out, "plan");
    let zoo = io::read_zoo(Path::new(&input))?;
    tracing::info!(
        enclosures = zoo.enclosures.len(),
        storages = zoo.storages.len(),
        dead_zones = zoo.dead_zones.len(),
        runs_allowed = zoo.runs_allowed(),
        capacity = zoo.battery_capacity,
        "zoo_loaded"
    );

    let runs = generate_runs_with_defaults(&zoo)?;
    let fed: usize = runs.iter().map(|r| r.fed.len()).sum();
    let importance = fed_importance(&zoo, &runs);
    tracing::info!(runs = runs.len(), fed, importance, "plan_done");

    let out_path = Path::new(&out);
    ensure_parent_dir(out_path)?;
    io::write_paths(out_path, &runs)?;
    provenance::write_sidecar(
        out_path,
        provenance::Payload::new(json!({
            "input": input,
            "enclosures": zoo.enclosures.len(),
            "runs": runs.len(),
            "fed": fed,
            "fed_importance": importance,
        })),
    )?;
    Ok(())
}

#[derive(Serialize)]
struct CheckReport {
    ok: bool,
    runs: usize,
    violations: Vec<String>,
}

/// Map an output-file stop back to a known 3-D location (z was dropped on
/// write). Depot wins, then storages, then enclosure feeding points.
fn resolve_stop(zoo: &Zoo, xy: (i64, i64)) -> Option<Point> {
    if (zoo.depot.x, zoo.depot.y) == xy {
        return Some(zoo.depot);
    }
    zoo.storages
        .iter()
        .map(|s| s.location)
        .chain(zoo.enclosures.iter().map(|e| e.feeding_point))
        .find(|p| (p.x, p.y) == xy)
}

fn check(zoo_path: String, paths_path: String) -> Result<()> {
    tracing::info!(zoo = zoo_path, paths = paths_path, "check");
    let zoo = io::read_zoo(Path::new(&zoo_path))?;
    let text = fs::read_to_string(&paths_path)?;
    let runs = io::parse_paths(&text)?;

    let mut violations = Vec::new();
    if runs.len() > zoo.runs_allowed() {
        violations.push(format!(
            "{} runs exceed the allowed {}",
            runs.len(),
            zoo.runs_allowed()
        ));
    }

    let mut feedings = vec![0usize; zoo.enclosures.len()];
    for (i, run) in runs.iter().enumerate() {
        let mut resolved = Vec::with_capacity(run.len());
        let mut unknown = false;
        for &xy in run {
            match resolve_stop(&zoo, xy) {
                Some(p) => resolved.push(p),
                None => {
                    violations.push(format!("run {i}: unknown stop ({},{})", xy.0, xy.1));
                    unknown = true;
                    break;
                }
            }
        }
        if unknown {
            continue;
        }
        if let Err(v) = check_run(&resolved, &zoo, FlightCfg::default()) {
            violations.push(format!("run {i}: {v}"));
        }
        for p in &resolved {
            if let Some(j) = zoo
                .enclosures
                .iter()
                .position(|e| (e.feeding_point.x, e.feeding_point.y) == (p.x, p.y))
            {
                feedings[j] += 1;
            }
        }
    }
    for (j, &n) in feedings.iter().enumerate() {
        if n > 1 {
            violations.push(format!("enclosure {j} fed {n} times"));
        }
    }

    let report = CheckReport {
        ok: violations.is_empty(),
        runs: runs.len(),
        violations,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}

fn sample(seed: u64, index: u64, out: String) -> Result<()> {
    tracing::info!(seed, index, out, "sample");
    let zoo = draw_zoo(&ZooCfg::default(), ReplayToken { seed, index });
    let out_path = Path::new(&out);
    ensure_parent_dir(out_path)?;
    fs::write(out_path, io::format_zoo(&zoo))?;
    provenance::write_sidecar(
        out_path,
        provenance::Payload::new(json!({
            "seed": seed,
            "index": index,
            "enclosures": zoo.enclosures.len(),
        })),
    )?;
    Ok(())
}
