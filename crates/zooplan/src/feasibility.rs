//! Run feasibility: battery budget and dead-zone clearance.
//!
//! Purpose
//! - Answer "is this candidate depot-to-depot path legal?" for the planner,
//!   and report the first violation with enough detail for diagnostics
//!   (`cli check` prints it).
//!
//! Policy
//! - Every consecutive leg is tested against every dead zone, boundary legs
//!   included; there is no legal reason to exempt the depot legs.
//! - A violation is ordinary control flow for the planner (reject candidate,
//!   try the next), never an error.
//!
//! References
//! - Code cross-refs: `geom::{total_run_distance, leg_enters_zone}`,
//!   `planner::RunBuilder`

use thiserror::Error;

use crate::geom::{leg_enters_zone, total_run_distance, FlightCfg};
use crate::model::{Point, Zoo};

/// Why a candidate run is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Violation {
    /// Fewer than two points, or the path does not start and end at the depot.
    #[error("path must start and end at the depot")]
    Malformed,
    #[error("run needs {required:.3} but battery capacity is {capacity:.3}")]
    BatteryExceeded { required: f64, capacity: f64 },
    /// Leg `leg` (0-based, between path[leg] and path[leg+1]) crosses dead
    /// zone `zone` (index into `Zoo::dead_zones`).
    #[error("leg {leg} crosses dead zone {zone}")]
    DeadZoneCrossed { leg: usize, zone: usize },
}

/// Validate a complete run. Ok carries the total distance flown.
pub fn check_run(path: &[Point], zoo: &Zoo, cfg: FlightCfg) -> Result<f64, Violation> {
    if path.len() < 2 || path[0] != zoo.depot || path[path.len() - 1] != zoo.depot {
        return Err(Violation::Malformed);
    }
    let required = total_run_distance(path, zoo.depot, cfg);
    if required > zoo.battery_capacity {
        return Err(Violation::BatteryExceeded {
            required,
            capacity: zoo.battery_capacity,
        });
    }
    for (leg, pair) in path.windows(2).enumerate() {
        for (zone, dz) in zoo.dead_zones.iter().enumerate() {
            if leg_enters_zone(pair[0], pair[1], dz) {
                return Err(Violation::DeadZoneCrossed { leg, zone });
            }
        }
    }
    Ok(required)
}

/// Boolean form used in the planner's hot loop.
#[inline]
pub fn is_feasible(path: &[Point], zoo: &Zoo, cfg: FlightCfg) -> bool {
    check_run(path, zoo, cfg).is_ok()
}
