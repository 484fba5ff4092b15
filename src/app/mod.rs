//! Application orchestration layer
//!
//! Coordinates between the vision input, the cube domain, the visual guide,
//! and the solver boundary. The session owns every component; the
//! orchestrator holds the scan state machine.

pub mod orchestrator;
pub mod session;

pub use orchestrator::{CommitOutcome, ScanOrchestrator, ScanPhase};
pub use session::{ScanSession, TickFrame};
