//! Cube-to-solver adapter
//!
//! Bridges the completed cube state store and the external solver: validates
//! overall sticker counts, serializes the store into the solver's string
//! format, and normalizes the staged response into one flat move list.

use tracing::{debug, error};

use crate::domain::cube::CubeState;
use crate::domain::face::{Color, FaceId, FaceReading};
use crate::solver::{CubeSolver, PartitionedSolution, PhasePayload};

/// Length of a serialized cube: 6 faces of 9 stickers
pub const CUBE_STRING_LEN: usize = 54;

/// Failures surfaced by the adapter
///
/// All of these are returned to the caller as values; the scan state is left
/// intact so the user can re-scan a face and try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Defensive completeness re-check failed
    #[error("Scan is not complete; missing faces: {missing:?}")]
    ScanIncomplete { missing: Vec<FaceId> },

    /// A color's total sticker count across the cube deviates from 9
    #[error("Found {found} {color} stickers (need 9)")]
    StickerCountMismatch { color: Color, found: usize },

    /// No solver entry point is wired into the session
    #[error("Solver is not available")]
    SolverUnavailable,

    /// The solver rejected a structurally valid cube
    ///
    /// The rejection detail is logged, never surfaced.
    #[error("Impossible cube state, please rescan")]
    ImpossibleState,
}

/// Checks that every color appears exactly 9 times across the scanned cube
///
/// Colors are checked in the solver face order, so a surplus on a side face
/// is reported before a deficit on top or bottom.
pub fn validate_sticker_counts(state: &CubeState) -> Result<(), SolveError> {
    for face in FaceId::SOLVER_ORDER {
        let color = face.color();
        let found = state.sticker_count(color);
        if found != FaceReading::STICKER_COUNT {
            return Err(SolveError::StickerCountMismatch { color, found });
        }
    }
    Ok(())
}

/// Serializes a complete store into the solver's 54-character string
///
/// Faces are visited in Front, Right, Up, Down, Left, Back order; stickers in
/// raster order; each sticker maps to the solver character of its color's
/// face identity.
pub fn cube_string(state: &CubeState) -> Result<String, SolveError> {
    let missing = state.missing_faces();
    if !missing.is_empty() {
        return Err(SolveError::ScanIncomplete { missing });
    }

    let mut serialized = String::with_capacity(CUBE_STRING_LEN);
    for face in FaceId::SOLVER_ORDER {
        let Some(reading) = state.get(face) else {
            return Err(SolveError::ScanIncomplete {
                missing: vec![face],
            });
        };
        for sticker in reading.stickers() {
            serialized.push(sticker.face().solver_char());
        }
    }
    Ok(serialized)
}

/// Normalizes one move token
///
/// Contract: the input is a single algebraic move such as `R`, `R2` or a
/// reverse move in either spelling. The verbose `prime` suffix is rewritten
/// to the canonical apostrophe (`Uprime` becomes `U'`); surrounding
/// whitespace is trimmed; empty and whitespace-only input yields `None`.
pub fn normalize_token(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.replace("prime", "'"))
}

/// Flattens a staged solution into one ordered move list
///
/// Phases contribute in execution order. Token-list and joined-string
/// payloads flatten identically; every token is normalized and empty tokens
/// are dropped.
pub fn flatten_moves(solution: &PartitionedSolution) -> Vec<String> {
    let phases = [
        &solution.cross,
        &solution.f2l,
        &solution.oll,
        &solution.pll,
    ];

    let mut moves = Vec::new();
    for payload in phases {
        match payload {
            PhasePayload::Tokens(tokens) => {
                for token in tokens {
                    collect_tokens(token, &mut moves);
                }
            }
            PhasePayload::Joined(text) => collect_tokens(text, &mut moves),
        }
    }
    moves
}

fn collect_tokens(text: &str, moves: &mut Vec<String>) {
    for piece in text.split_whitespace() {
        if let Some(normalized) = normalize_token(piece) {
            moves.push(normalized);
        }
    }
}

/// Validates, serializes, solves, and normalizes in one step
///
/// The store is only read; on any failure it is left as-is so the user can
/// correct the scan. Solver rejections are converted to a generic
/// impossible-state error with the detail kept to the log.
pub fn solve_scanned(
    state: &CubeState,
    solver: &dyn CubeSolver,
) -> Result<Vec<String>, SolveError> {
    validate_sticker_counts(state)?;
    let serialized = cube_string(state)?;
    debug!(cube = %serialized, "invoking solver");

    match solver.solve(&serialized) {
        Ok(solution) => Ok(flatten_moves(&solution)),
        Err(rejection) => {
            error!(detail = %rejection.detail, "solver rejected the cube");
            Err(SolveError::ImpossibleState)
        }
    }
}
