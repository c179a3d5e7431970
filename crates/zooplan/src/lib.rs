//! Zooplan: greedy flight planning for a battery-limited feeding drone.
//!
//! A zoo layout (depot, diet-typed food storages, importance-weighted
//! enclosures, circular dead zones) goes in; a list of depot-to-depot runs
//! comes out, each within the per-run battery budget and clear of every dead
//! zone. The planner is an explicit greedy heuristic, not an optimizer.
//!
//! Module map
//! - `model`: the immutable input aggregate and a deterministic sampler.
//! - `geom`: distance accounting and the segment/circle dead-zone test.
//! - `feasibility`: battery + dead-zone legality of a complete run.
//! - `planner`: single-run greedy builder and the multi-run orchestrator.

pub mod error;
pub mod feasibility;
pub mod geom;
pub mod model;
pub mod planner;

pub mod api;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::PlanError;
    pub use crate::feasibility::{check_run, is_feasible, Violation};
    pub use crate::geom::{horizontal_distance, total_run_distance, FlightCfg};
    pub use crate::model::{
        DeadZone, Diet, Enclosure, EnclosureId, FoodStorage, Point, StorageId, Zoo,
    };
    pub use crate::planner::{generate_runs, generate_runs_with_defaults, PlanCfg, Run};
}

/// Total importance fed by a set of runs. Used by callers reporting plan
/// quality.
pub fn fed_importance(zoo: &model::Zoo, runs: &[planner::Run]) -> f64 {
    runs.iter()
        .flat_map(|r| r.fed.iter())
        .map(|id| zoo.enclosures[id.0].importance)
        .sum()
}
