//! Flight geometry: distances and dead-zone intersection.
//!
//! Purpose
//! - Pure numeric functions shared by the feasibility checker and planner:
//!   horizontal leg lengths, the vertical landing/takeoff accounting, and the
//!   segment/circle test for dead zones.
//!
//! Distance convention
//! - The drone cruises at a fixed altitude (`FlightCfg::altitude`). A run
//!   pays one-way vertical at the depot on takeoff and landing, and two-way
//!   vertical (descend + ascend) at every non-depot stop, once per visit.
//!   This is the step-by-step decomposition of the problem statement; its
//!   worked example's own headline sum disagrees with its steps, and the
//!   steps win here (see DESIGN.md).
//!
//! References
//! - Code cross-refs: `feasibility::check_run`, `planner::RunBuilder`

mod distance;
mod intersect;

pub use distance::{
    depot_vertical_cost, horizontal_distance, stop_vertical_cost, total_run_distance, FlightCfg,
};
pub use intersect::{leg_enters_zone, segment_intersects_circle};

#[cfg(test)]
mod tests;
