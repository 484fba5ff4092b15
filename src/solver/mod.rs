//! External solver boundary
//!
//! The combinatorial solving algorithm is an external collaborator. The core
//! hands it a 54-character cube string and receives a staged solution back;
//! everything else (validation, serialization, normalization) lives in the
//! adapter.

pub mod adapter;

use std::fmt;

pub use adapter::{SolveError, cube_string, flatten_moves, normalize_token, solve_scanned};

/// Rejection raised by a solver implementation
///
/// Carries the implementation's own diagnostic. The adapter logs the detail
/// and surfaces only a generic impossible-state error to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverRejection {
    pub detail: String,
}

impl SolverRejection {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for SolverRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solver rejected cube: {}", self.detail)
    }
}

impl std::error::Error for SolverRejection {}

/// Payload of one solution phase
///
/// Solver implementations report each phase either as separate move tokens or
/// as one whitespace-joined string; the adapter flattens both identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhasePayload {
    Tokens(Vec<String>),
    Joined(String),
}

impl PhasePayload {
    /// A phase that contributes no moves
    pub fn empty() -> Self {
        PhasePayload::Tokens(Vec::new())
    }

    pub fn tokens(tokens: &[&str]) -> Self {
        PhasePayload::Tokens(tokens.iter().map(|token| (*token).to_string()).collect())
    }

    pub fn joined(text: impl Into<String>) -> Self {
        PhasePayload::Joined(text.into())
    }
}

/// Staged solution in the four classic phases, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedSolution {
    pub cross: PhasePayload,
    pub f2l: PhasePayload,
    pub oll: PhasePayload,
    pub pll: PhasePayload,
}

/// External cube solving routine
///
/// `cube_string` is 54 characters over the f/r/u/d/l/b alphabet, faces in
/// Front, Right, Up, Down, Left, Back order, stickers in raster order.
///
/// The call is synchronous; implementations own their waiting policy
/// (bounded retries, timeouts, cancellation). The core applies none.
pub trait CubeSolver {
    fn solve(&self, cube_string: &str) -> Result<PartitionedSolution, SolverRejection>;
}

/// Returns a fixed solution regardless of input
///
/// Stands in for the real solver in the demo binary and in tests.
#[derive(Debug, Clone)]
pub struct CannedSolver {
    solution: PartitionedSolution,
}

impl CannedSolver {
    pub fn new(solution: PartitionedSolution) -> Self {
        Self { solution }
    }
}

impl CubeSolver for CannedSolver {
    fn solve(&self, _cube_string: &str) -> Result<PartitionedSolution, SolverRejection> {
        Ok(self.solution.clone())
    }
}
