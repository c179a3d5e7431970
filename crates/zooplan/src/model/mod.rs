//! Zoo data model (read-only reference data).
//!
//! Purpose
//! - Provide the immutable input aggregate `Zoo` with value-compared points,
//!   diet-typed storages/enclosures, and circular dead zones.
//! - Solver bookkeeping (which enclosures are fed) deliberately lives in
//!   `planner::FedSet`, not on the entities here.
//!
//! References
//! - Code cross-refs: `geom::{horizontal_distance, total_run_distance}`,
//!   `planner::generate_runs`

pub mod rand;
mod types;

pub use types::{DeadZone, Diet, Enclosure, EnclosureId, FoodStorage, Point, StorageId, Zoo};
