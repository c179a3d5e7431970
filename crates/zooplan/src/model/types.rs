//! Core value types: points, diets, storages, enclosures, dead zones, `Zoo`.
//!
//! - Coordinates are non-negative integers inside `Zoo::dimensions`.
//! - `Zoo::validate` is the defensive boundary check; the planner refuses to
//!   run on a zoo that fails it.

use nalgebra::Vector2;

use crate::error::PlanError;

/// Integer 3D coordinate, compared by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
    /// XY projection as a float vector (flight legs are horizontal).
    #[inline]
    pub fn xy(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Diet class linking enclosures to the storages that can feed them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Carnivore, Diet::Herbivore, Diet::Omnivore];

    /// Input-file tag: `c`, `h`, or `o`.
    #[inline]
    pub fn from_char(c: char) -> Option<Diet> {
        match c {
            'c' => Some(Diet::Carnivore),
            'h' => Some(Diet::Herbivore),
            'o' => Some(Diet::Omnivore),
            _ => None,
        }
    }
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Diet::Carnivore => 'c',
            Diet::Herbivore => 'h',
            Diet::Omnivore => 'o',
        }
    }
    /// Dense index for per-diet tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Diet::Carnivore => 0,
            Diet::Herbivore => 1,
            Diet::Omnivore => 2,
        }
    }
}

/// Identifier types for clarity (indices into the `Zoo` collections).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnclosureId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StorageId(pub usize);

/// Food storage: pickup location plus the diet it serves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodStorage {
    pub location: Point,
    pub diet: Diet,
}

/// Animal enclosure: feeding point, positive importance weight, diet need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enclosure {
    pub feeding_point: Point,
    pub importance: f64,
    pub diet: Diet,
}

/// Circular no-fly area in the horizontal plane (z ignored).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeadZone {
    pub cx: i64,
    pub cy: i64,
    pub radius: i64,
}

impl DeadZone {
    #[inline]
    pub fn new(cx: i64, cy: i64, radius: i64) -> Self {
        Self { cx, cy, radius }
    }
    #[inline]
    pub fn center(self) -> Vector2<f64> {
        Vector2::new(self.cx as f64, self.cy as f64)
    }
}

/// The whole level: bounds, depot, battery budget, allowed extra runs, and
/// the three collections. Read-only once constructed.
#[derive(Clone, Debug)]
pub struct Zoo {
    /// Exclusive-maximum extents are not assumed; coordinates up to and
    /// including each component are accepted.
    pub dimensions: Point,
    pub depot: Point,
    /// Distance budget per run, in the same unit as coordinates.
    pub battery_capacity: f64,
    /// Extra runs beyond the first; total allowed runs = swaps + 1.
    pub battery_swaps: u32,
    pub storages: Vec<FoodStorage>,
    pub enclosures: Vec<Enclosure>,
    pub dead_zones: Vec<DeadZone>,
}

impl Zoo {
    #[inline]
    pub fn runs_allowed(&self) -> usize {
        self.battery_swaps as usize + 1
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        (0..=self.dimensions.x).contains(&p.x)
            && (0..=self.dimensions.y).contains(&p.y)
            && (0..=self.dimensions.z).contains(&p.z)
    }

    /// Structural sanity check. The planner runs this before anything else so
    /// a malformed zoo surfaces as `PlanError::InvalidZoo` instead of NaNs or
    /// nonsense plans.
    pub fn validate(&self) -> Result<(), PlanError> {
        let bad = |reason: String| Err(PlanError::InvalidZoo(reason));
        if self.dimensions.x <= 0 || self.dimensions.y <= 0 || self.dimensions.z <= 0 {
            return bad(format!("non-positive dimensions {}", self.dimensions));
        }
        if !self.battery_capacity.is_finite() || self.battery_capacity <= 0.0 {
            return bad(format!("battery capacity {} not positive", self.battery_capacity));
        }
        if !self.in_bounds(self.depot) {
            return bad(format!("depot {} outside dimensions {}", self.depot, self.dimensions));
        }
        for (i, s) in self.storages.iter().enumerate() {
            if !self.in_bounds(s.location) {
                return bad(format!("storage #{i} at {} out of bounds", s.location));
            }
        }
        for (i, e) in self.enclosures.iter().enumerate() {
            if !self.in_bounds(e.feeding_point) {
                return bad(format!("enclosure #{i} at {} out of bounds", e.feeding_point));
            }
            if !e.importance.is_finite() || e.importance <= 0.0 {
                return bad(format!("enclosure #{i} importance {} not positive", e.importance));
            }
        }
        for (i, dz) in self.dead_zones.iter().enumerate() {
            if dz.radius <= 0 {
                return bad(format!("dead zone #{i} radius {} not positive", dz.radius));
            }
            if dz.cx < 0 || dz.cy < 0 {
                return bad(format!("dead zone #{i} center ({},{}) negative", dz.cx, dz.cy));
            }
        }
        Ok(())
    }
}
