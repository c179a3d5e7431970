//! Random zoo layouts (deterministic, replay-token indexed).
//!
//! Purpose
//! - Provide a small, reproducible sampler for zoo layouts used by benches,
//!   the `sample` CLI subcommand, and determinism tests. The generator is
//!   parameterizable and always produces a zoo that passes `Zoo::validate`.
//!
//! Model
//! - Uniform integer coordinates inside the configured dimensions; diets
//!   cycle through all three classes so every diet has at least one storage;
//!   dead-zone centers are re-drawn until they clear the depot.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{DeadZone, Diet, Enclosure, FoodStorage, Point, Zoo};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ZooCfg {
    /// Inclusive coordinate extents.
    pub dimensions: Point,
    /// Storages drawn per diet class.
    pub storages_per_diet: usize,
    pub enclosures: usize,
    pub dead_zones: usize,
    /// Radii are drawn from `1..=max_dead_zone_radius`.
    pub max_dead_zone_radius: i64,
    pub battery_capacity: f64,
    pub battery_swaps: u32,
    /// Importance weights are uniform in `[min, max)`.
    pub importance: (f64, f64),
}

impl Default for ZooCfg {
    fn default() -> Self {
        Self {
            dimensions: Point::new(100, 100, 20),
            storages_per_diet: 2,
            enclosures: 12,
            dead_zones: 3,
            max_dead_zone_radius: 6,
            battery_capacity: 2750.0,
            battery_swaps: 50,
            importance: (0.5, 10.0),
        }
    }
}

#[inline]
fn draw_point(dims: Point, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..=dims.x),
        rng.gen_range(0..=dims.y),
        rng.gen_range(0..=dims.z),
    )
}

/// Draw a zoo layout. Same `(cfg, tok)` always yields the same zoo.
pub fn draw_zoo(cfg: &ZooCfg, tok: ReplayToken) -> Zoo {
    let mut rng = tok.to_std_rng();
    let dims = cfg.dimensions;
    let depot = draw_point(dims, &mut rng);

    let mut storages = Vec::with_capacity(3 * cfg.storages_per_diet);
    for diet in Diet::ALL {
        for _ in 0..cfg.storages_per_diet {
            storages.push(FoodStorage {
                location: draw_point(dims, &mut rng),
                diet,
            });
        }
    }

    let (imp_lo, imp_hi) = cfg.importance;
    let enclosures = (0..cfg.enclosures)
        .map(|k| Enclosure {
            feeding_point: draw_point(dims, &mut rng),
            importance: rng.gen_range(imp_lo..imp_hi.max(imp_lo + 1e-9)),
            diet: Diet::ALL[k % 3],
        })
        .collect();

    let mut dead_zones = Vec::with_capacity(cfg.dead_zones);
    for _ in 0..cfg.dead_zones {
        let radius = rng.gen_range(1..=cfg.max_dead_zone_radius.max(1));
        // Re-draw centers that would trap the depot; skip the zone if the
        // layout is too tight to place it.
        for _ in 0..32 {
            let cx = rng.gen_range(0..=dims.x);
            let cy = rng.gen_range(0..=dims.y);
            let d2 = (cx - depot.x).pow(2) + (cy - depot.y).pow(2);
            if d2 > radius * radius {
                dead_zones.push(DeadZone::new(cx, cy, radius));
                break;
            }
        }
    }

    Zoo {
        dimensions: dims,
        depot,
        battery_capacity: cfg.battery_capacity,
        battery_swaps: cfg.battery_swaps,
        storages,
        enclosures,
        dead_zones,
    }
}
