//! Raw observation resolution
//!
//! The vision collaborator hands over candidate observations as nine
//! free-form color labels in raster order. This module is the structural and
//! semantic mapping step that turns one into a typed reading keyed by its
//! center sticker. No statistical or geometric validation happens here; that
//! belongs to the vision pipeline.

use crate::domain::face::{Color, FaceId, FaceReading};

/// Errors produced while resolving a raw observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    /// The observation did not carry exactly nine sticker labels
    WrongStickerCount(usize),
    /// A label did not map to any palette color
    ///
    /// `position` is the raster index of the offending sticker. A typed
    /// reading cannot hold a non-palette sticker at any position, center
    /// or otherwise.
    UnknownLabel { position: usize, label: String },
}

impl std::fmt::Display for ObservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObservationError::WrongStickerCount(count) => {
                write!(f, "Observation has {} stickers (need 9)", count)
            }
            ObservationError::UnknownLabel { position, label } => {
                write!(f, "Unknown color label '{}' at position {}", label, position)
            }
        }
    }
}

impl std::error::Error for ObservationError {}

/// One candidate face observation as delivered by the vision collaborator
///
/// Labels are raw strings in raster order (row-major, top-left to
/// bottom-right). The vision pipeline classifies noisy pixels, so labels may
/// be anything; resolution rejects what the palette cannot absorb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObservation {
    labels: Vec<String>,
}

impl RawObservation {
    /// Wraps raw labels from the vision collaborator
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Convenience constructor from static label strings
    pub fn from_labels(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|label| (*label).to_string()).collect(),
        }
    }

    /// The raw labels in raster order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Resolves a raw observation into its face identity and typed reading
///
/// The center sticker (raster position 4) determines the face through the
/// fixed color/face bijection. Rejection is a normal outcome under a noisy
/// vision pipeline; callers log it and carry on scanning.
///
/// # Returns
/// The resolved face and reading, or the reason the observation was dropped.
///
/// # Example
/// ```rust
/// use cubescan::domain::face::FaceId;
/// use cubescan::domain::observation::{resolve, RawObservation};
///
/// let observation = RawObservation::from_labels(&["green"; 9]);
/// let (face, reading) = resolve(&observation).unwrap();
/// assert_eq!(face, FaceId::Front);
/// assert_eq!(reading.center(), face.color());
/// ```
pub fn resolve(observation: &RawObservation) -> Result<(FaceId, FaceReading), ObservationError> {
    let labels = observation.labels();
    if labels.len() != FaceReading::STICKER_COUNT {
        return Err(ObservationError::WrongStickerCount(labels.len()));
    }

    let mut stickers = [Color::White; FaceReading::STICKER_COUNT];
    for (position, label) in labels.iter().enumerate() {
        stickers[position] =
            Color::from_label(label).ok_or_else(|| ObservationError::UnknownLabel {
                position,
                label: label.clone(),
            })?;
    }

    let reading = FaceReading::new(stickers);
    Ok((reading.center().face(), reading))
}
