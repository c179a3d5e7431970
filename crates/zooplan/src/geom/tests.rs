use nalgebra::Vector2;
use proptest::prelude::*;

use super::*;
use crate::model::{DeadZone, Point};

#[test]
fn horizontal_distance_ignores_z() {
    let a = Point::new(0, 0, 0);
    let b = Point::new(3, 4, 17);
    assert!((horizontal_distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(horizontal_distance(a, a), 0.0);
}

#[test]
fn vertical_costs_follow_altitude_delta() {
    let cfg = FlightCfg::default();
    assert!((depot_vertical_cost(Point::new(8, 10, 10), cfg) - 40.0).abs() < 1e-12);
    assert!((stop_vertical_cost(Point::new(6, 9, 2), cfg) - 96.0).abs() < 1e-12);
    assert!((stop_vertical_cost(Point::new(7, 24, 5), cfg) - 90.0).abs() < 1e-12);
}

#[test]
fn worked_example_run_distance() {
    // Depot -> herbivore storage -> rhino enclosure -> depot, the worked
    // example from the problem statement (the step-by-step value, ~297.3).
    let depot = Point::new(8, 10, 10);
    let storage = Point::new(6, 9, 2);
    let rhino = Point::new(7, 24, 5);
    let path = [depot, storage, rhino, depot];
    let total = total_run_distance(&path, depot, FlightCfg::default());
    let expected = 40.0 + 5.0f64.sqrt() + 96.0 + 226.0f64.sqrt() + 90.0 + 197.0f64.sqrt() + 40.0;
    assert!((total - expected).abs() < 1e-9, "got {total}, want {expected}");
    assert!((total - 297.305).abs() < 1e-3);
}

#[test]
fn depot_only_run_pays_vertical_both_ways() {
    let depot = Point::new(2, 2, 5);
    let path = [depot, depot];
    let total = total_run_distance(&path, depot, FlightCfg::default());
    assert!((total - 90.0).abs() < 1e-12);
}

#[test]
fn intermediate_depot_coordinates_pay_no_stop_cost() {
    let depot = Point::new(0, 0, 0);
    let stop = Point::new(10, 0, 0);
    let cfg = FlightCfg::default();
    // depot -> stop -> depot -> stop -> depot: the middle depot visit is a
    // flyover in cost terms (no landing there). Four 10-unit legs, two stop
    // costs of 100, takeoff and landing of 50 each.
    let path = [depot, stop, depot, stop, depot];
    let total = total_run_distance(&path, depot, cfg);
    assert!((total - 340.0).abs() < 1e-12);
}

#[test]
fn segment_circle_hits_and_misses() {
    let c = Vector2::new(5.0, 0.0);
    // Segment passes through the center.
    assert!(segment_intersects_circle(
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        c,
        1.0
    ));
    // Parallel segment outside the radius.
    assert!(!segment_intersects_circle(
        Vector2::new(0.0, 2.0),
        Vector2::new(10.0, 2.0),
        c,
        1.0
    ));
    // Boundary touch is NOT an intersection (strict rule).
    assert!(!segment_intersects_circle(
        Vector2::new(0.0, 1.0),
        Vector2::new(10.0, 1.0),
        c,
        1.0
    ));
    // Segment ending short of the circle: closest point is the clamped
    // endpoint, not the infinite-line projection.
    assert!(!segment_intersects_circle(
        Vector2::new(0.0, 0.0),
        Vector2::new(3.0, 0.0),
        c,
        1.5
    ));
}

#[test]
fn degenerate_segment_is_point_in_circle() {
    let p = Vector2::new(1.0, 1.0);
    assert!(segment_intersects_circle(p, p, Vector2::new(1.5, 1.0), 1.0));
    assert!(!segment_intersects_circle(p, p, Vector2::new(3.0, 1.0), 1.0));
    // On-boundary point: strict rule again.
    assert!(!segment_intersects_circle(p, p, Vector2::new(2.0, 1.0), 1.0));
}

#[test]
fn leg_enters_zone_uses_xy_projection() {
    let zone = DeadZone::new(5, 5, 2);
    // z differs wildly; only XY matters.
    assert!(leg_enters_zone(
        Point::new(0, 5, 0),
        Point::new(10, 5, 19),
        &zone
    ));
    assert!(!leg_enters_zone(
        Point::new(0, 0, 0),
        Point::new(10, 0, 19),
        &zone
    ));
}

proptest! {
    #[test]
    fn horizontal_distance_symmetric(ax in 0i64..200, ay in 0i64..200, az in 0i64..50,
                                     bx in 0i64..200, by in 0i64..200, bz in 0i64..50) {
        let a = Point::new(ax, ay, az);
        let b = Point::new(bx, by, bz);
        prop_assert!((horizontal_distance(a, b) - horizontal_distance(b, a)).abs() < 1e-12);
    }

    #[test]
    fn segment_circle_symmetric_in_endpoints(ax in -50.0f64..50.0, ay in -50.0f64..50.0,
                                             bx in -50.0f64..50.0, by in -50.0f64..50.0,
                                             cx in -50.0f64..50.0, cy in -50.0f64..50.0,
                                             r in 0.1f64..25.0) {
        let a = Vector2::new(ax, ay);
        let b = Vector2::new(bx, by);
        let c = Vector2::new(cx, cy);
        prop_assert_eq!(
            segment_intersects_circle(a, b, c, r),
            segment_intersects_circle(b, a, c, r)
        );
    }

    #[test]
    fn endpoint_inside_implies_intersection(ax in -50.0f64..50.0, ay in -50.0f64..50.0,
                                            bx in -50.0f64..50.0, by in -50.0f64..50.0,
                                            r in 0.5f64..25.0) {
        let a = Vector2::new(ax, ay);
        let b = Vector2::new(bx, by);
        // Center sits on endpoint a, so a is strictly inside any r > 0.
        prop_assert!(segment_intersects_circle(a, b, a, r));
    }

    #[test]
    fn run_distance_at_least_depot_round_trip(x in 0i64..100, y in 0i64..100, z in 0i64..40,
                                              sx in 0i64..100, sy in 0i64..100, sz in 0i64..40) {
        let cfg = FlightCfg::default();
        let depot = Point::new(x, y, z);
        let stop = Point::new(sx, sy, sz);
        let total = total_run_distance(&[depot, stop, depot], depot, cfg);
        prop_assert!(total >= 2.0 * depot_vertical_cost(depot, cfg) - 1e-9);
    }
}
