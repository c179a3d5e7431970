//! Horizontal and vertical distance accounting for a run.

use crate::model::Point;

/// Flight configuration (cruise altitude).
#[derive(Clone, Copy, Debug)]
pub struct FlightCfg {
    /// Cruise altitude above ground. Stops above this altitude would yield
    /// negative vertical legs; `Zoo::validate` bounds z by the zoo dimensions
    /// and callers pick an altitude above them.
    pub altitude: f64,
}

impl Default for FlightCfg {
    fn default() -> Self {
        Self { altitude: 50.0 }
    }
}

/// Euclidean distance in the XY plane. Symmetric; zero iff x,y coincide.
#[inline]
pub fn horizontal_distance(a: Point, b: Point) -> f64 {
    (a.xy() - b.xy()).norm()
}

/// One-way vertical cost at the depot (takeoff only, or landing only).
#[inline]
pub fn depot_vertical_cost(depot: Point, cfg: FlightCfg) -> f64 {
    cfg.altitude - depot.z as f64
}

/// Two-way vertical cost of a non-depot stop: descend to the stop, climb
/// back to altitude.
#[inline]
pub fn stop_vertical_cost(p: Point, cfg: FlightCfg) -> f64 {
    2.0 * (cfg.altitude - p.z as f64)
}

/// Total distance of a depot-to-depot run.
///
/// The path is an ordered point sequence whose first and last entries are
/// `depot`; `feasibility::check_run` enforces that shape before calling.
/// Any intermediate point equal to the depot pays no stop cost (the drone
/// does not land there).
pub fn total_run_distance(path: &[Point], depot: Point, cfg: FlightCfg) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    let mut total = depot_vertical_cost(depot, cfg);
    for pair in path.windows(2) {
        total += horizontal_distance(pair[0], pair[1]);
        if pair[1] != depot {
            total += stop_vertical_cost(pair[1], cfg);
        }
    }
    total + depot_vertical_cost(depot, cfg)
}
