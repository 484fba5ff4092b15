//! Time-based animation tracks for the cube proxy
//!
//! Two independent tween tracks drive the rendering sink: a confirmation
//! pulse (uniform scale) and a guidance rotation (3-axis pose). Both recompute
//! their progress from wall-clock elapsed time on every sample, so animation
//! speed is frame-rate independent. The current instant is always passed in
//! by the caller, which keeps every curve deterministic under test.

use glam::Vec3;
use std::time::{Duration, Instant};

/// Progress through a tween, clamped to [0, 1]
fn progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Confirmation pulse: the whole cube scales up and back down once
///
/// The scale follows `base + sin(progress * pi) * (peak - base)`, rising to
/// the peak at the midpoint and returning to the baseline at the end. On
/// completion the track deactivates and snaps the scale back to the exact
/// baseline so no floating-point drift accumulates across pulses.
#[derive(Debug, Clone, Copy)]
pub struct PulseTrack {
    started: Option<Instant>,
    duration: Duration,
    base_scale: f32,
    peak_scale: f32,
}

impl PulseTrack {
    pub const BASE_SCALE: f32 = 1.0;
    pub const DEFAULT_PEAK_SCALE: f32 = 1.15;

    pub fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
            base_scale: Self::BASE_SCALE,
            peak_scale: Self::DEFAULT_PEAK_SCALE,
        }
    }

    /// Starts (or restarts) the pulse at `now`
    pub fn trigger(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// Current scale factor at `now`
    ///
    /// Deactivates the track exactly when progress reaches 1.
    pub fn sample(&mut self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.base_scale;
        };

        let progress = progress(started, self.duration, now);
        if progress >= 1.0 {
            self.started = None;
            return self.base_scale;
        }

        let swell = (progress * std::f32::consts::PI).sin();
        self.base_scale + swell * (self.peak_scale - self.base_scale)
    }
}

/// Guidance rotation: a 3-axis pose easing toward a target
///
/// The start pose is captured from the track's current value at trigger time,
/// not assumed to be the previous target, so re-triggering mid-tween stays
/// smooth instead of jumping. Easing is cubic ease-out.
#[derive(Debug, Clone, Copy)]
pub struct RotationTrack {
    current: Vec3,
    start: Vec3,
    target: Vec3,
    started: Option<Instant>,
    duration: Duration,
}

impl RotationTrack {
    /// Creates an inactive track resting at the Front pose
    pub fn new() -> Self {
        Self {
            current: Vec3::ZERO,
            start: Vec3::ZERO,
            target: Vec3::ZERO,
            started: None,
            duration: Duration::ZERO,
        }
    }

    /// Jumps to `pose` with no tween, cancelling any active one
    pub fn snap(&mut self, pose: Vec3) {
        self.current = pose;
        self.target = pose;
        self.started = None;
    }

    /// Starts easing from the current pose toward `target`
    pub fn tween_to(&mut self, target: Vec3, duration: Duration, now: Instant) {
        // Advance first so a mid-tween retrigger captures the live pose
        let current = self.sample(now);
        self.start = current;
        self.target = target;
        self.duration = duration;
        self.started = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// The last sampled pose, without advancing the tween
    pub fn pose(&self) -> Vec3 {
        self.current
    }

    /// Current pose at `now`
    ///
    /// Lands exactly on the target when progress reaches 1, then deactivates.
    pub fn sample(&mut self, now: Instant) -> Vec3 {
        if let Some(started) = self.started {
            let progress = progress(started, self.duration, now);
            if progress >= 1.0 {
                self.current = self.target;
                self.started = None;
            } else {
                let eased = 1.0 - (1.0 - progress).powi(3);
                self.current = self.start.lerp(self.target, eased);
            }
        }
        self.current
    }
}

impl Default for RotationTrack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULSE: Duration = Duration::from_millis(600);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn idle_pulse_stays_at_baseline() {
        let mut pulse = PulseTrack::new(PULSE);
        assert!(!pulse.is_active());
        assert_eq!(pulse.sample(Instant::now()), PulseTrack::BASE_SCALE);
    }

    #[test]
    fn pulse_peaks_at_midpoint() {
        let t0 = Instant::now();
        let mut pulse = PulseTrack::new(PULSE);
        pulse.trigger(t0);

        let scale = pulse.sample(t0 + PULSE / 2);
        assert!(close(scale, PulseTrack::DEFAULT_PEAK_SCALE));
        assert!(pulse.is_active());
    }

    #[test]
    fn pulse_resets_exactly_to_baseline_and_deactivates() {
        let t0 = Instant::now();
        let mut pulse = PulseTrack::new(PULSE);
        pulse.trigger(t0);

        assert_eq!(pulse.sample(t0 + PULSE), PulseTrack::BASE_SCALE);
        assert!(!pulse.is_active());

        // Well past the end it stays at the baseline
        assert_eq!(pulse.sample(t0 + PULSE * 3), PulseTrack::BASE_SCALE);
    }

    #[test]
    fn pulse_rises_then_falls() {
        let t0 = Instant::now();
        let mut pulse = PulseTrack::new(PULSE);
        pulse.trigger(t0);

        let early = pulse.sample(t0 + PULSE / 4);
        let peak = pulse.sample(t0 + PULSE / 2);
        let late = pulse.sample(t0 + PULSE * 3 / 4);
        assert!(early > PulseTrack::BASE_SCALE);
        assert!(peak > early);
        assert!(late < peak);
        assert!(close(early, late));
    }

    #[test]
    fn rotation_starts_from_captured_pose() {
        let t0 = Instant::now();
        let mut rotation = RotationTrack::new();
        rotation.snap(Vec3::new(0.5, 0.0, 0.0));
        rotation.tween_to(Vec3::new(0.0, 1.0, 0.0), Duration::from_millis(800), t0);

        // At elapsed zero the pose equals the captured start
        assert_eq!(rotation.sample(t0), Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn rotation_lands_exactly_on_target_and_deactivates() {
        let t0 = Instant::now();
        let duration = Duration::from_millis(800);
        let target = Vec3::new(0.0, -std::f32::consts::FRAC_PI_2, 0.0);

        let mut rotation = RotationTrack::new();
        rotation.tween_to(target, duration, t0);

        assert_eq!(rotation.sample(t0 + duration), target);
        assert!(!rotation.is_active());
        assert_eq!(rotation.sample(t0 + duration * 2), target);
    }

    #[test]
    fn rotation_ease_out_front_loads_motion() {
        let t0 = Instant::now();
        let duration = Duration::from_millis(1000);
        let target = Vec3::new(0.0, 1.0, 0.0);

        let mut rotation = RotationTrack::new();
        rotation.tween_to(target, duration, t0);

        // Cubic ease-out covers 87.5% of the distance in the first half
        let halfway = rotation.sample(t0 + duration / 2);
        assert!(close(halfway.y, 0.875));
    }

    #[test]
    fn retrigger_mid_tween_is_continuous() {
        let t0 = Instant::now();
        let duration = Duration::from_millis(1000);

        let mut rotation = RotationTrack::new();
        rotation.tween_to(Vec3::new(0.0, 1.0, 0.0), duration, t0);

        let midpoint = t0 + duration / 2;
        let before = rotation.sample(midpoint);
        rotation.tween_to(Vec3::new(1.0, 0.0, 0.0), duration, midpoint);
        let after = rotation.sample(midpoint);

        assert_eq!(before, after);
        assert!(rotation.is_active());
    }

    #[test]
    fn snap_cancels_active_tween() {
        let t0 = Instant::now();
        let mut rotation = RotationTrack::new();
        rotation.tween_to(Vec3::new(0.0, 1.0, 0.0), Duration::from_millis(800), t0);

        rotation.snap(Vec3::ZERO);
        assert!(!rotation.is_active());
        assert_eq!(rotation.sample(t0 + Duration::from_millis(400)), Vec3::ZERO);
    }
}
