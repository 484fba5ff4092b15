//! Scan orchestration state machine
//!
//! Owns the cube state store and decides, on every accepted observation, how
//! the scan progresses: which face to request next, when the delayed guidance
//! rotation becomes due, and when the scan is complete. The orchestrator is
//! pure state transitions; the session applies the resulting side effects
//! (pulse, proxy colors, rotation) to the visual layer.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::domain::cube::CubeState;
use crate::domain::face::{Color, FaceId, FaceReading};
use crate::domain::observation::{self, RawObservation};

/// Lifecycle of one scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// No face has been scanned yet
    AwaitingFirst,
    /// At least one face is known; guidance is active
    Scanning,
    /// All six faces are known
    Complete,
}

/// Result of one accepted commit
///
/// Returned so callers can render immediately without polling the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The face the reading was resolved to
    pub face: FaceId,
    /// The committed reading
    pub reading: FaceReading,
    /// True for the very first accepted commit of the session
    pub first_scan: bool,
    /// True when this commit completed the cube
    pub completed: bool,
}

/// The scan state machine
///
/// Exclusively owns and mutates the [`CubeState`] under the single-owner
/// tick model; the rendering side and the solver adapter only read it.
#[derive(Debug)]
pub struct ScanOrchestrator {
    store: CubeState,
    phase: ScanPhase,
    expected: Option<FaceId>,
    /// When the pending guided rotation becomes due; at most one exists
    guidance_due: Option<Instant>,
    delay_before_next: Duration,
}

impl ScanOrchestrator {
    /// Creates an orchestrator with an empty store
    ///
    /// # Arguments
    /// * `delay_before_next` - wait between a commit and the guided rotation,
    ///   long enough for the confirmation pulse to be seen
    pub fn new(delay_before_next: Duration) -> Self {
        Self {
            store: CubeState::new(),
            phase: ScanPhase::AwaitingFirst,
            expected: None,
            guidance_due: None,
            delay_before_next,
        }
    }

    pub fn store(&self) -> &CubeState {
        &self.store
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Face the user is currently asked to present, if any
    pub fn expected_face(&self) -> Option<FaceId> {
        self.expected
    }

    /// Color hint for the vision collaborator
    ///
    /// The one piece of orchestrator state the detector may read back, to
    /// bias its square-color matching toward the anticipated face. `None`
    /// before the first scan and after completion.
    pub fn expected_color(&self) -> Option<Color> {
        self.expected.map(|face| face.color())
    }

    /// Accepts a candidate observation and advances the state machine
    ///
    /// Malformed observations are dropped with a log line and no state
    /// change; the state machine has no fatal errors. An accepted commit
    /// stores the reading (last write wins for re-scans), selects the next
    /// expected face, and schedules the debounced guidance action. A commit
    /// that completes the cube clears the expected face and cancels any
    /// pending guidance instead.
    pub fn commit(&mut self, observation: &RawObservation, now: Instant) -> Option<CommitOutcome> {
        if self.phase == ScanPhase::Complete {
            return None;
        }

        let (face, reading) = match observation::resolve(observation) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(%err, "dropping malformed observation");
                return None;
            }
        };

        let first_scan = self.phase == ScanPhase::AwaitingFirst;
        self.store.set(face, reading);
        info!(%face, scanned = self.store.scanned_count(), "face committed");

        if self.store.is_complete() {
            self.phase = ScanPhase::Complete;
            self.expected = None;
            self.guidance_due = None;
            info!("all six faces scanned");
            return Some(CommitOutcome {
                face,
                reading,
                first_scan,
                completed: true,
            });
        }

        self.phase = ScanPhase::Scanning;
        self.expected = self.next_face();
        // Only one pending guidance action may exist; a fresh commit
        // replaces any stale deadline before the rotation compounds
        self.guidance_due = Some(now + self.delay_before_next);

        Some(CommitOutcome {
            face,
            reading,
            first_scan,
            completed: false,
        })
    }

    /// Fires the pending guidance action once its deadline has elapsed
    ///
    /// Returns the face to rotate toward, at most once per scheduled commit
    /// and never after completion.
    pub fn poll_guidance(&mut self, now: Instant) -> Option<FaceId> {
        let due = self.guidance_due?;
        if now < due {
            return None;
        }
        self.guidance_due = None;

        let next = self.next_face()?;
        self.expected = Some(next);
        debug!(%next, "guiding toward next face");
        Some(next)
    }

    /// Picks the next face to request
    ///
    /// First missing face in the fixed priority order (Front, Right, Back,
    /// Left, Up, Down); falls back to store order if the priority list were
    /// ever incomplete. `None` once nothing is missing.
    pub fn next_face(&self) -> Option<FaceId> {
        let missing = self.store.missing_faces();
        FaceId::SCAN_PRIORITY
            .into_iter()
            .find(|face| missing.contains(face))
            .or_else(|| missing.first().copied())
    }

    /// Starts a fresh scan session
    pub fn reset(&mut self) {
        self.store.reset();
        self.phase = ScanPhase::AwaitingFirst;
        self.expected = None;
        self.guidance_due = None;
    }
}
