use crate::domain::face::Color;
use std::time::Duration;

/// Timing configuration for the scan guidance animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTimings {
    /// Length of the confirmation pulse
    pub pulse_duration: Duration,
    /// Length of an ordinary rotation tween
    pub rotation_duration: Duration,
    /// Length of the guided rotation toward the next requested face
    pub guide_rotation_duration: Duration,
    /// Delay between a commit and the guided rotation, so the pulse is seen
    pub delay_before_next: Duration,
}

impl ScanTimings {
    pub const MIN_DURATION: Duration = Duration::from_millis(50);
    pub const MAX_DURATION: Duration = Duration::from_secs(10);

    pub const DEFAULT_PULSE: Duration = Duration::from_millis(600);
    pub const DEFAULT_ROTATION: Duration = Duration::from_millis(800);
    pub const DEFAULT_GUIDE_ROTATION: Duration = Duration::from_millis(1500);
    pub const DEFAULT_DELAY_BEFORE_NEXT: Duration = Duration::from_millis(1200);

    pub fn sanitize_duration(value: Duration) -> Duration {
        value.clamp(Self::MIN_DURATION, Self::MAX_DURATION)
    }

    /// Returns a copy with every duration clamped into the supported range
    pub fn sanitized(self) -> Self {
        Self {
            pulse_duration: Self::sanitize_duration(self.pulse_duration),
            rotation_duration: Self::sanitize_duration(self.rotation_duration),
            guide_rotation_duration: Self::sanitize_duration(self.guide_rotation_duration),
            delay_before_next: Self::sanitize_duration(self.delay_before_next),
        }
    }
}

impl Default for ScanTimings {
    fn default() -> Self {
        Self {
            pulse_duration: Self::DEFAULT_PULSE,
            rotation_duration: Self::DEFAULT_ROTATION,
            guide_rotation_duration: Self::DEFAULT_GUIDE_ROTATION,
            delay_before_next: Self::DEFAULT_DELAY_BEFORE_NEXT,
        }
    }
}

/// An RGBA color used by the preview renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Display colors for the rendered cube proxy
///
/// Maps each sticker color to its on-screen RGBA value, plus the dim
/// placeholder shown on facets that have not been scanned yet and the cell
/// outline color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPalette {
    white: Rgba,
    yellow: Rgba,
    green: Rgba,
    blue: Rgba,
    orange: Rgba,
    red: Rgba,
    placeholder: Rgba,
    outline: Rgba,
}

impl DisplayPalette {
    pub const DEFAULT_PLACEHOLDER: Rgba = Rgba::new(68, 68, 68, 217);
    pub const DEFAULT_OUTLINE: Rgba = Rgba::new(255, 255, 255, 128);

    pub fn color_of(&self, color: Color) -> Rgba {
        match color {
            Color::White => self.white,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
            Color::Blue => self.blue,
            Color::Orange => self.orange,
            Color::Red => self.red,
        }
    }

    pub fn placeholder(&self) -> Rgba {
        self.placeholder
    }

    pub fn outline(&self) -> Rgba {
        self.outline
    }
}

impl Default for DisplayPalette {
    fn default() -> Self {
        Self {
            white: Rgba::opaque(255, 255, 255),
            yellow: Rgba::opaque(255, 213, 0),
            green: Rgba::opaque(0, 155, 72),
            blue: Rgba::opaque(0, 69, 173),
            orange: Rgba::opaque(255, 89, 0),
            red: Rgba::opaque(185, 0, 0),
            placeholder: Self::DEFAULT_PLACEHOLDER,
            outline: Self::DEFAULT_OUTLINE,
        }
    }
}
