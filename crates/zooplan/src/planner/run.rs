//! Single-run construction by greedy insertion.
//!
//! The builder walks SELECTING -> EXTENDING -> COMMITTED/REJECTED until no
//! candidate fits, then FINALIZE: append the depot, re-check the whole path,
//! and either accept the run or roll back every commitment it made.

use crate::error::PlanError;
use crate::feasibility::{check_run, is_feasible};
use crate::geom::FlightCfg;
use crate::model::{Diet, EnclosureId, Point, StorageId, Zoo};

use super::types::{PlanCfg, PlanContext, Run, SelectionPolicy, StorageIndex};

/// Outcome of one selection scan.
enum Extend {
    Committed,
    Exhausted,
}

/// Run builder carrying shared context and per-run accumulators.
pub(crate) struct RunBuilder<'a> {
    zoo: &'a Zoo,
    fcfg: FlightCfg,
    cfg: PlanCfg,
    /// All enclosure ids, descending importance (ties by input order).
    order: &'a [EnclosureId],
    storages: &'a StorageIndex,
    ctx: &'a mut PlanContext,
    /// Current path, depot first, no trailing depot until finalize.
    path: Vec<Point>,
    location: Point,
    carried: Option<Diet>,
    committed: Vec<EnclosureId>,
}

impl<'a> RunBuilder<'a> {
    pub fn new(
        zoo: &'a Zoo,
        fcfg: FlightCfg,
        cfg: PlanCfg,
        order: &'a [EnclosureId],
        storages: &'a StorageIndex,
        ctx: &'a mut PlanContext,
    ) -> Self {
        Self {
            zoo,
            fcfg,
            cfg,
            order,
            storages,
            ctx,
            path: vec![zoo.depot],
            location: zoo.depot,
            carried: None,
            committed: Vec::new(),
        }
    }

    /// Build one run. `Ok(None)` means no feasible insertion existed (or the
    /// finalize safety net fired and the run was rolled back).
    pub fn build(mut self) -> Result<Option<Run>, PlanError> {
        loop {
            match self.select_and_extend()? {
                Extend::Committed => continue,
                Extend::Exhausted => break,
            }
        }
        self.finalize()
    }

    /// Scan unfed candidates by importance; commit the first feasible
    /// insertion. The minimal insertion is the feeding point alone when the
    /// drone already carries the right diet, else a detour to the nearest
    /// matching storage first.
    fn select_and_extend(&mut self) -> Result<Extend, PlanError> {
        for &id in self.order {
            if self.ctx.fed.is_fed(id) {
                continue;
            }
            let enc = &self.zoo.enclosures[id.0];
            let pickup: Option<StorageId> = if self.carried == Some(enc.diet) {
                None
            } else {
                match self.storages.nearest(self.zoo, enc.diet, self.location) {
                    Some(sid) => Some(sid),
                    // No storage serves this diet: unserviceable, not a
                    // rejection (does not end a BestOnly run).
                    None => continue,
                }
            };

            if self.ctx.evals_left == 0 {
                return Ok(Extend::Exhausted);
            }
            self.ctx.evals_left -= 1;

            let mut tentative = self.path.clone();
            if let Some(sid) = pickup {
                tentative.push(self.zoo.storages[sid.0].location);
            }
            tentative.push(enc.feeding_point);
            tentative.push(self.zoo.depot);

            if is_feasible(&tentative, self.zoo, self.fcfg) {
                tentative.pop(); // keep the return leg out until finalize
                self.path = tentative;
                if let Some(sid) = pickup {
                    self.carried = Some(self.zoo.storages[sid.0].diet);
                }
                self.location = enc.feeding_point;
                self.ctx.fed.mark(id)?;
                self.committed.push(id);
                return Ok(Extend::Committed);
            }

            match self.cfg.policy {
                SelectionPolicy::BestOnly => return Ok(Extend::Exhausted),
                SelectionPolicy::BestWithSkip => continue,
            }
        }
        Ok(Extend::Exhausted)
    }

    /// Close the path at the depot and re-validate end to end. A failure here
    /// means the incremental checks and the final check disagree; the run is
    /// discarded and every commitment rolled back.
    fn finalize(mut self) -> Result<Option<Run>, PlanError> {
        if self.committed.is_empty() {
            return Ok(None);
        }
        self.path.push(self.zoo.depot);
        match check_run(&self.path, self.zoo, self.fcfg) {
            Ok(distance) => Ok(Some(Run {
                path: self.path,
                fed: self.committed,
                distance,
            })),
            Err(_) => {
                for &id in &self.committed {
                    self.ctx.fed.unmark(id)?;
                }
                Ok(None)
            }
        }
    }
}
