//! Error surface of the planning core.
//!
//! Only two conditions ever escape the core: a structurally invalid zoo and a
//! detected internal invariant violation. Candidate infeasibility (battery,
//! dead zones) is normal control flow inside the planner and never appears
//! here.

use thiserror::Error;

/// Fatal planning errors.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The zoo fails structural validation (defensive boundary check).
    #[error("invalid zoo: {0}")]
    InvalidZoo(String),
    /// An internal invariant broke (double feeding, bad rollback). Not
    /// recoverable; callers should report and abort.
    #[error("planner state corruption: {0}")]
    StateCorruption(String),
}
