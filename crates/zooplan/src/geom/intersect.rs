//! Segment/circle intersection for dead-zone checks.

use nalgebra::Vector2;

use crate::model::{DeadZone, Point};

/// Does the segment `p1..p2` pass strictly inside the circle?
///
/// Projects the center onto the segment (parameter clamped to [0,1]) and
/// compares squared distances. A leg that only touches the boundary
/// (distance exactly equal to the radius) does NOT intersect; the policy is
/// strict inequality (see DESIGN.md).
pub fn segment_intersects_circle(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    center: Vector2<f64>,
    radius: f64,
) -> bool {
    let r2 = radius * radius;
    let d = p2 - p1;
    let len_sq = d.norm_squared();
    if len_sq == 0.0 {
        // Degenerate segment: point-in-circle, same strict rule.
        return (center - p1).norm_squared() < r2;
    }
    let t = ((center - p1).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = p1 + d * t;
    (center - closest).norm_squared() < r2
}

/// Does the horizontal flight leg `a -> b` cross the dead zone?
#[inline]
pub fn leg_enters_zone(a: Point, b: Point, zone: &DeadZone) -> bool {
    segment_intersects_circle(a.xy(), b.xy(), zone.center(), zone.radius as f64)
}
