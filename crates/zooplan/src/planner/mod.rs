//! Greedy multi-run planner.
//!
//! Purpose
//! - Produce up to `battery_swaps + 1` depot-to-depot runs that feed as much
//!   importance as possible, one run at a time, sharing a fed-enclosure set
//!   across runs so no enclosure is fed twice.
//!
//! Shape
//! - `generate_runs` drives `RunBuilder` (one instance per run) over a
//!   `PlanContext` holding the cross-run state. Runs are sequential by
//!   construction: each run's candidate pool depends on what earlier runs
//!   committed. A run that commits nothing ends planning early; the pool
//!   only shrinks, so later attempts cannot do better.
//!
//! References
//! - Code cross-refs: `feasibility::check_run`, `geom::FlightCfg`,
//!   `model::Zoo`

mod run;
mod types;

pub use types::{FedSet, PlanCfg, PlanContext, Run, SelectionPolicy};

pub(crate) use types::StorageIndex;

use crate::error::PlanError;
use crate::geom::FlightCfg;
use crate::model::{EnclosureId, Zoo};
use run::RunBuilder;

/// Plan all runs for a zoo. The fed set starts empty on every invocation.
pub fn generate_runs(zoo: &Zoo, fcfg: FlightCfg, cfg: PlanCfg) -> Result<Vec<Run>, PlanError> {
    zoo.validate()?;
    let order = importance_order(zoo);
    let storages = StorageIndex::build(zoo);
    let mut ctx = PlanContext::new(zoo.enclosures.len(), cfg.eval_budget);
    let mut runs = Vec::new();
    for _ in 0..zoo.runs_allowed() {
        let builder = RunBuilder::new(zoo, fcfg, cfg, &order, &storages, &mut ctx);
        match builder.build()? {
            Some(run) => runs.push(run),
            None => break,
        }
        if ctx.evals_left == 0 {
            break;
        }
    }
    Ok(runs)
}

/// Convenience: default flight altitude and planner configuration.
pub fn generate_runs_with_defaults(zoo: &Zoo) -> Result<Vec<Run>, PlanError> {
    generate_runs(zoo, FlightCfg::default(), PlanCfg::default())
}

/// Enclosure ids sorted by descending importance; equal weights keep input
/// order (stable sort), which pins down tie-breaking and determinism.
fn importance_order(zoo: &Zoo) -> Vec<EnclosureId> {
    let mut order: Vec<EnclosureId> = (0..zoo.enclosures.len()).map(EnclosureId).collect();
    order.sort_by(|a, b| {
        let ia = zoo.enclosures[a.0].importance;
        let ib = zoo.enclosures[b.0].importance;
        ib.partial_cmp(&ia).unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
