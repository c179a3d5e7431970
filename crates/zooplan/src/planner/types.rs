//! Data types for the greedy planner: config, shared context, and runs.
//!
//! Kept small and explicit to make the `run` builder easy to read.

use crate::error::PlanError;
use crate::model::{Diet, EnclosureId, Point, StorageId, Zoo};

/// Candidate-selection policy inside a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Only ever try the single highest-importance candidate; end the run on
    /// its first rejection. Brittle, kept selectable for comparisons.
    BestOnly,
    /// Skip a rejected candidate and keep scanning by importance. Avoids
    /// truncating a run when only the best candidate is unreachable.
    BestWithSkip,
}

/// Planner configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlanCfg {
    pub policy: SelectionPolicy,
    /// Upper bound on feasibility evaluations across the whole plan. Candidate
    /// scans are quadratic per run; on pathological inputs the budget ends
    /// planning gracefully with the runs produced so far. The default is
    /// effectively unbounded.
    pub eval_budget: u64,
}

impl Default for PlanCfg {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::BestWithSkip,
            eval_budget: u64::MAX,
        }
    }
}

/// Fed bookkeeping, owned by the orchestrator and shared across runs.
///
/// Invariants:
/// - An id is marked at most once per planning invocation (double marking is
///   state corruption, not infeasibility).
/// - Unmarking only happens in run rollback, and only for marked ids.
#[derive(Clone, Debug)]
pub struct FedSet {
    fed: Vec<bool>,
    count: usize,
}

impl FedSet {
    pub fn new(enclosures: usize) -> Self {
        Self {
            fed: vec![false; enclosures],
            count: 0,
        }
    }

    #[inline]
    pub fn is_fed(&self, id: EnclosureId) -> bool {
        self.fed[id.0]
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Commit a feeding. Errors if the enclosure was already fed.
    pub fn mark(&mut self, id: EnclosureId) -> Result<(), PlanError> {
        if self.fed[id.0] {
            return Err(PlanError::StateCorruption(format!(
                "enclosure {} fed twice",
                id.0
            )));
        }
        self.fed[id.0] = true;
        self.count += 1;
        Ok(())
    }

    /// Roll back an uncommitted feeding. Errors if the flag was not set.
    pub fn unmark(&mut self, id: EnclosureId) -> Result<(), PlanError> {
        if !self.fed[id.0] {
            return Err(PlanError::StateCorruption(format!(
                "rollback of unfed enclosure {}",
                id.0
            )));
        }
        self.fed[id.0] = false;
        self.count -= 1;
        Ok(())
    }
}

/// Cross-run planning state, passed into each run invocation.
#[derive(Clone, Debug)]
pub struct PlanContext {
    pub fed: FedSet,
    /// Remaining feasibility evaluations (counts down from the budget).
    pub evals_left: u64,
}

impl PlanContext {
    pub fn new(enclosures: usize, eval_budget: u64) -> Self {
        Self {
            fed: FedSet::new(enclosures),
            evals_left: eval_budget,
        }
    }
}

/// One finalized depot-to-depot run.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    /// Ordered stops; first and last are the depot.
    pub path: Vec<Point>,
    /// Enclosures fed by this run, in visit order.
    pub fed: Vec<EnclosureId>,
    /// Total distance flown, as accounted by `geom::total_run_distance`.
    pub distance: f64,
}

/// Storages grouped by diet for nearest-pickup lookups.
#[derive(Clone, Debug)]
pub(crate) struct StorageIndex {
    by_diet: [Vec<StorageId>; 3],
}

impl StorageIndex {
    pub fn build(zoo: &Zoo) -> Self {
        let mut by_diet: [Vec<StorageId>; 3] = Default::default();
        for (i, s) in zoo.storages.iter().enumerate() {
            by_diet[s.diet.index()].push(StorageId(i));
        }
        Self { by_diet }
    }

    /// Nearest storage of `diet` from `from` by horizontal distance; ties
    /// keep the earliest input entry.
    pub fn nearest(&self, zoo: &Zoo, diet: Diet, from: Point) -> Option<StorageId> {
        let mut best: Option<(StorageId, f64)> = None;
        for &sid in &self.by_diet[diet.index()] {
            let d = crate::geom::horizontal_distance(from, zoo.storages[sid.0].location);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((sid, d));
            }
        }
        best.map(|(sid, _)| sid)
    }
}
