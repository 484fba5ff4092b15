//! Scan session and tick loop coordination
//!
//! The session is the top-level object owning every component explicitly:
//! the orchestrator (and through it the cube state), the animation tracks,
//! the proxy, the configuration, and the boxed collaborators. One `tick` per
//! rendering callback drives the whole pipeline; nothing lives in ambient
//! globals.

use std::time::Instant;

use glam::Vec3;
use tracing::info;

use crate::app::orchestrator::{CommitOutcome, ScanOrchestrator, ScanPhase};
use crate::config::{DisplayPalette, ScanTimings};
use crate::domain::cube::CubeState;
use crate::domain::face::Color;
use crate::input::vision::VisionSource;
use crate::solver::{CubeSolver, SolveError, adapter};
use crate::ui::animation::{PulseTrack, RotationTrack};
use crate::ui::proxy::CubeProxy;
use crate::ui::renderer::ProxyLayout;

/// What the rendering sink needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFrame {
    /// Uniform scale from the pulse track
    pub scale: f32,
    /// 3-axis rotation from the rotation track
    pub pose: Vec3,
    /// The commit accepted this tick, if any
    pub committed: Option<CommitOutcome>,
    /// True once all six faces are scanned
    pub complete: bool,
}

/// One scanning session from first face to solve
pub struct ScanSession {
    orchestrator: ScanOrchestrator,
    pulse: PulseTrack,
    rotation: RotationTrack,
    proxy: CubeProxy,
    timings: ScanTimings,
    palette: DisplayPalette,
    vision: Box<dyn VisionSource>,
    solver: Option<Box<dyn CubeSolver>>,
}

impl ScanSession {
    /// Creates a session with default timings and palette
    pub fn new(vision: Box<dyn VisionSource>, solver: Option<Box<dyn CubeSolver>>) -> Self {
        Self::with_config(
            vision,
            solver,
            ScanTimings::default(),
            DisplayPalette::default(),
        )
    }

    /// Creates a session with explicit configuration
    ///
    /// Timings are sanitized on the way in, so a wild configuration cannot
    /// stall the guidance loop.
    pub fn with_config(
        vision: Box<dyn VisionSource>,
        solver: Option<Box<dyn CubeSolver>>,
        timings: ScanTimings,
        palette: DisplayPalette,
    ) -> Self {
        let timings = timings.sanitized();
        Self {
            orchestrator: ScanOrchestrator::new(timings.delay_before_next),
            pulse: PulseTrack::new(timings.pulse_duration),
            rotation: RotationTrack::new(),
            proxy: CubeProxy::new(),
            timings,
            palette,
            vision,
            solver,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.orchestrator.phase()
    }

    pub fn store(&self) -> &CubeState {
        self.orchestrator.store()
    }

    pub fn proxy(&self) -> &CubeProxy {
        &self.proxy
    }

    pub fn palette(&self) -> &DisplayPalette {
        &self.palette
    }

    /// Color the vision collaborator is being hinted toward
    pub fn expected_color(&self) -> Option<Color> {
        self.orchestrator.expected_color()
    }

    /// Advances the session by one tick
    ///
    /// Polls the vision source, commits an arriving observation, applies the
    /// visual side effects (proxy colors, pulse, snap or scheduled rotation),
    /// and samples both animation tracks for the rendering sink.
    pub fn tick(&mut self, now: Instant) -> TickFrame {
        let observation = self.vision.poll(self.orchestrator.expected_color());
        let committed =
            observation.and_then(|observation| self.orchestrator.commit(&observation, now));

        if let Some(outcome) = committed {
            if outcome.first_scan {
                // Show the fully-labeled skeleton and face the scanned side
                // directly; there is nothing to guide toward yet
                self.proxy.fill_centers();
                self.rotation.snap(outcome.face.guidance_pose());
            }
            self.proxy.apply_reading(outcome.face, &outcome.reading);
            self.pulse.trigger(now);
        }

        if let Some(next) = self.orchestrator.poll_guidance(now) {
            self.rotation
                .tween_to(next.guidance_pose(), self.timings.guide_rotation_duration, now);
        }

        TickFrame {
            scale: self.pulse.sample(now),
            pose: self.rotation.sample(now),
            committed,
            complete: self.orchestrator.phase() == ScanPhase::Complete,
        }
    }

    /// Projects the proxy for a frame, ready for the renderer
    pub fn project(&self, frame: &TickFrame, canvas_size: u32) -> ProxyLayout {
        ProxyLayout::project(
            &self.proxy,
            frame.pose,
            frame.scale,
            canvas_size,
            &self.palette,
        )
    }

    /// Hands the completed scan to the solver and returns normalized moves
    pub fn solve(&self) -> Result<Vec<String>, SolveError> {
        let solver = self
            .solver
            .as_deref()
            .ok_or(SolveError::SolverUnavailable)?;
        let moves = adapter::solve_scanned(self.orchestrator.store(), solver)?;
        info!(moves = moves.len(), "solution ready");
        Ok(moves)
    }

    /// Discards all scan progress and starts over
    pub fn reset(&mut self) {
        self.orchestrator.reset();
        self.proxy = CubeProxy::new();
        self.pulse = PulseTrack::new(self.timings.pulse_duration);
        self.rotation = RotationTrack::new();
        info!("scan session reset");
    }
}
