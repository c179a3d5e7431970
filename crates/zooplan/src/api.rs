//! Curated flat re-export surface for binaries and experiments.
//!
//! The CLI consumes the planner through this module; prefer it over deep
//! paths so call sites stay stable while the module layout evolves.

// Model
pub use crate::model::rand::{draw_zoo, ReplayToken, ZooCfg};
pub use crate::model::{DeadZone, Diet, Enclosure, EnclosureId, FoodStorage, Point, StorageId, Zoo};

// Geometry & feasibility
pub use crate::feasibility::{check_run, is_feasible, Violation};
pub use crate::geom::{
    horizontal_distance, segment_intersects_circle, total_run_distance, FlightCfg,
};

// Planner
pub use crate::error::PlanError;
pub use crate::planner::{
    generate_runs, generate_runs_with_defaults, FedSet, PlanCfg, Run, SelectionPolicy,
};

pub use crate::fed_importance;
