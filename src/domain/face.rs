//! Sticker colors, face identities, and the fixed tables tying them together
//!
//! This module defines the closed six-color palette and the six logical faces
//! of the cube, plus every fixed lookup the rest of the system relies on:
//! the color/face bijection, iteration orders, the solver alphabet, the proxy
//! facet indices, and the guidance pose table. It is completely pure.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

/// One of the six sticker colors of a standard cube
///
/// The palette is closed: every sticker on a well-scanned cube is exactly one
/// of these. Each color is bound 1:1 to the logical face whose center shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// All palette colors, in the same order as [`FaceId::STORE_ORDER`]
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Parses a color from the vision collaborator's lowercase label
    ///
    /// Labels are matched after trimming and ASCII-lowercasing, so `"White"`
    /// and `" white "` both resolve. Unknown labels yield `None`.
    ///
    /// # Example
    /// ```rust
    /// use cubescan::domain::face::Color;
    ///
    /// assert_eq!(Color::from_label("green"), Some(Color::Green));
    /// assert_eq!(Color::from_label("teal"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "white" => Some(Color::White),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            "red" => Some(Color::Red),
            _ => None,
        }
    }

    /// The lowercase label form used by the vision collaborator
    pub fn label(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Red => "red",
        }
    }

    /// Human-readable name used in error messages ("Red", "White", ...)
    pub fn display_name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Orange => "Orange",
            Color::Red => "Red",
        }
    }

    /// The logical face whose stickers carry this color
    ///
    /// Fixed at scan start: the face currently showing mostly color X *is*
    /// logically face X.
    pub fn face(&self) -> FaceId {
        match self {
            Color::White => FaceId::Up,
            Color::Yellow => FaceId::Down,
            Color::Green => FaceId::Front,
            Color::Blue => FaceId::Back,
            Color::Orange => FaceId::Left,
            Color::Red => FaceId::Right,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One of the six logical faces of the cube
///
/// Face identities are fixed by convention regardless of physical color; the
/// bijection with [`Color`] is established once at scan start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl FaceId {
    /// Stable iteration order of the cube state store
    pub const STORE_ORDER: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Down,
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
    ];

    /// Guidance priority: side faces before top and bottom
    ///
    /// A deliberate heuristic that rotates the physical cube in a
    /// predictable, low-effort sequence rather than a data-driven tour.
    pub const SCAN_PRIORITY: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Right,
        FaceId::Back,
        FaceId::Left,
        FaceId::Up,
        FaceId::Down,
    ];

    /// Face order the external solver expects cube strings in
    pub const SOLVER_ORDER: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Right,
        FaceId::Up,
        FaceId::Down,
        FaceId::Left,
        FaceId::Back,
    ];

    /// Position of this face in [`Self::STORE_ORDER`]
    ///
    /// Used as the slot index by the cube state store.
    pub fn index(&self) -> usize {
        match self {
            FaceId::Up => 0,
            FaceId::Down => 1,
            FaceId::Front => 2,
            FaceId::Back => 3,
            FaceId::Left => 4,
            FaceId::Right => 5,
        }
    }

    /// The sticker color bound to this face identity
    pub fn color(&self) -> Color {
        match self {
            FaceId::Up => Color::White,
            FaceId::Down => Color::Yellow,
            FaceId::Front => Color::Green,
            FaceId::Back => Color::Blue,
            FaceId::Left => Color::Orange,
            FaceId::Right => Color::Red,
        }
    }

    /// Single-character solver alphabet for this face
    pub fn solver_char(&self) -> char {
        match self {
            FaceId::Up => 'u',
            FaceId::Down => 'd',
            FaceId::Front => 'f',
            FaceId::Back => 'b',
            FaceId::Left => 'l',
            FaceId::Right => 'r',
        }
    }

    /// Inverse of [`Self::solver_char`]
    pub fn from_solver_char(c: char) -> Option<Self> {
        match c {
            'u' => Some(FaceId::Up),
            'd' => Some(FaceId::Down),
            'f' => Some(FaceId::Front),
            'b' => Some(FaceId::Back),
            'l' => Some(FaceId::Left),
            'r' => Some(FaceId::Right),
            _ => None,
        }
    }

    /// Facet slot of this face on a proxy cell
    ///
    /// The proxy mesh exposes six facet slots per cell in +x, -x, +y, -y,
    /// +z, -z order; this table keeps the rendering adapter swappable.
    pub fn facet_index(&self) -> usize {
        match self {
            FaceId::Right => 0,
            FaceId::Left => 1,
            FaceId::Up => 2,
            FaceId::Down => 3,
            FaceId::Front => 4,
            FaceId::Back => 5,
        }
    }

    /// Target rotation presenting this face to the viewer
    ///
    /// One rotation per Cartesian axis, each within [-pi, pi]. Front is the
    /// rest pose.
    pub fn guidance_pose(&self) -> Vec3 {
        match self {
            FaceId::Front => Vec3::new(0.0, 0.0, 0.0),
            FaceId::Back => Vec3::new(0.0, PI, 0.0),
            FaceId::Right => Vec3::new(0.0, -FRAC_PI_2, 0.0),
            FaceId::Left => Vec3::new(0.0, FRAC_PI_2, 0.0),
            FaceId::Up => Vec3::new(FRAC_PI_2, 0.0, 0.0),
            FaceId::Down => Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        }
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaceId::Up => "Up",
            FaceId::Down => "Down",
            FaceId::Front => "Front",
            FaceId::Back => "Back",
            FaceId::Left => "Left",
            FaceId::Right => "Right",
        };
        f.write_str(name)
    }
}

/// A validated 9-sticker sample of one physical face
///
/// Stickers are stored in raster order: row-major, top-left to bottom-right
/// as seen when facing the scanned side. Position 4 is the center sticker and
/// is authoritative for which face the reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceReading {
    stickers: [Color; 9],
}

impl FaceReading {
    /// Number of stickers per face
    pub const STICKER_COUNT: usize = 9;
    /// Raster index of the center sticker
    pub const CENTER: usize = 4;

    /// Creates a reading from stickers in raster order
    pub fn new(stickers: [Color; 9]) -> Self {
        Self { stickers }
    }

    /// A reading where every sticker has the same color
    ///
    /// This is what a solved cube's face scans as.
    pub fn solid(color: Color) -> Self {
        Self {
            stickers: [color; 9],
        }
    }

    /// The center sticker color
    pub fn center(&self) -> Color {
        self.stickers[Self::CENTER]
    }

    /// All stickers in raster order
    pub fn stickers(&self) -> &[Color; 9] {
        &self.stickers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_face_bijection_round_trips() {
        for color in Color::ALL {
            assert_eq!(color.face().color(), color);
        }
        for face in FaceId::STORE_ORDER {
            assert_eq!(face.color().face(), face);
        }
    }

    #[test]
    fn label_parsing_round_trips() {
        for color in Color::ALL {
            assert_eq!(Color::from_label(color.label()), Some(color));
        }
    }

    #[test]
    fn label_parsing_is_forgiving_about_case_and_whitespace() {
        assert_eq!(Color::from_label("  White "), Some(Color::White));
        assert_eq!(Color::from_label("ORANGE"), Some(Color::Orange));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(Color::from_label("teal"), None);
        assert_eq!(Color::from_label(""), None);
    }

    #[test]
    fn scan_priority_spans_all_faces() {
        for face in FaceId::STORE_ORDER {
            assert!(FaceId::SCAN_PRIORITY.contains(&face));
        }
    }

    #[test]
    fn solver_order_spans_all_faces() {
        for face in FaceId::STORE_ORDER {
            assert!(FaceId::SOLVER_ORDER.contains(&face));
        }
    }

    #[test]
    fn store_indices_match_store_order() {
        for (i, face) in FaceId::STORE_ORDER.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn facet_indices_are_distinct() {
        let mut seen = [false; 6];
        for face in FaceId::STORE_ORDER {
            let idx = face.facet_index();
            assert!(!seen[idx], "facet index {} reused", idx);
            seen[idx] = true;
        }
    }

    #[test]
    fn solver_chars_round_trip() {
        for face in FaceId::STORE_ORDER {
            assert_eq!(FaceId::from_solver_char(face.solver_char()), Some(face));
        }
        assert_eq!(FaceId::from_solver_char('x'), None);
    }

    #[test]
    fn front_pose_is_rest_pose() {
        assert_eq!(FaceId::Front.guidance_pose(), Vec3::ZERO);
    }

    #[test]
    fn poses_stay_within_half_turn() {
        for face in FaceId::STORE_ORDER {
            let pose = face.guidance_pose();
            for axis in [pose.x, pose.y, pose.z] {
                assert!(axis.abs() <= PI + f32::EPSILON);
            }
        }
    }

    #[test]
    fn reading_center_is_position_four() {
        let mut stickers = [Color::White; 9];
        stickers[4] = Color::Green;
        let reading = FaceReading::new(stickers);
        assert_eq!(reading.center(), Color::Green);
    }
}
