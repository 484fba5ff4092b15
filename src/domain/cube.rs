//! Cube state store
//!
//! The single source of truth for the scan: six face slots, each either unset
//! or holding one validated reading. The store is exclusively owned and
//! mutated by the scan orchestrator under the single-owner tick model; no
//! locking is needed and none is provided.

use crate::domain::face::{Color, FaceId, FaceReading};

/// Scanned sticker colors for up to six faces
///
/// All slots start unset. A slot is only ever written with data belonging to
/// its own face (the orchestrator commits readings keyed by their center
/// sticker), but a fresh reading for the *same* face overwrites freely so the
/// user can correct a bad scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubeState {
    slots: [Option<FaceReading>; 6],
}

impl CubeState {
    /// Creates an empty store with all six faces unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a reading for a face, overwriting any previous one
    pub fn set(&mut self, face: FaceId, reading: FaceReading) {
        self.slots[face.index()] = Some(reading);
    }

    /// Returns the stored reading for a face, if scanned
    pub fn get(&self, face: FaceId) -> Option<&FaceReading> {
        self.slots[face.index()].as_ref()
    }

    /// True once every face has been scanned
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Unscanned faces, in the stable store order
    pub fn missing_faces(&self) -> Vec<FaceId> {
        FaceId::STORE_ORDER
            .into_iter()
            .filter(|face| self.get(*face).is_none())
            .collect()
    }

    /// Number of faces scanned so far
    pub fn scanned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total stickers of one color across all scanned faces
    ///
    /// Used only by the solver adapter's pre-solve validation; a complete,
    /// well-scanned cube counts exactly 9 for every color.
    pub fn sticker_count(&self, color: Color) -> usize {
        self.slots
            .iter()
            .flatten()
            .flat_map(|reading| reading.stickers())
            .filter(|sticker| **sticker == color)
            .count()
    }

    /// Clears every slot, starting a new scan session
    pub fn reset(&mut self) {
        self.slots = [None; 6];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = CubeState::new();
        assert!(!store.is_complete());
        assert_eq!(store.scanned_count(), 0);
        assert_eq!(store.missing_faces(), FaceId::STORE_ORDER.to_vec());
    }

    #[test]
    fn completion_flips_exactly_on_sixth_face() {
        let mut store = CubeState::new();
        for (scanned, face) in FaceId::STORE_ORDER.into_iter().enumerate() {
            assert!(!store.is_complete(), "complete after {} faces", scanned);
            store.set(face, FaceReading::solid(face.color()));
        }
        assert!(store.is_complete());
        assert!(store.missing_faces().is_empty());
    }

    #[test]
    fn rescan_keeps_one_entry_with_latest_reading() {
        let mut store = CubeState::new();
        store.set(FaceId::Front, FaceReading::solid(Color::Green));

        let mut corrected = [Color::Green; 9];
        corrected[0] = Color::Red;
        store.set(FaceId::Front, FaceReading::new(corrected));

        assert_eq!(store.scanned_count(), 1);
        assert_eq!(store.get(FaceId::Front), Some(&FaceReading::new(corrected)));
        // Re-scanning does not change which faces are missing
        assert_eq!(store.missing_faces().len(), 5);
        assert!(!store.missing_faces().contains(&FaceId::Front));
    }

    #[test]
    fn missing_faces_follow_store_order() {
        let mut store = CubeState::new();
        store.set(FaceId::Front, FaceReading::solid(Color::Green));
        store.set(FaceId::Right, FaceReading::solid(Color::Red));

        assert_eq!(
            store.missing_faces(),
            vec![FaceId::Up, FaceId::Down, FaceId::Back, FaceId::Left]
        );
    }

    #[test]
    fn sticker_counts_span_all_scanned_faces() {
        let mut store = CubeState::new();
        store.set(FaceId::Up, FaceReading::solid(Color::White));

        let mut mixed = [Color::Green; 9];
        mixed[0] = Color::White;
        store.set(FaceId::Front, FaceReading::new(mixed));

        assert_eq!(store.sticker_count(Color::White), 10);
        assert_eq!(store.sticker_count(Color::Green), 8);
        assert_eq!(store.sticker_count(Color::Blue), 0);
    }

    #[test]
    fn complete_solved_cube_counts_nine_of_each() {
        let mut store = CubeState::new();
        for face in FaceId::STORE_ORDER {
            store.set(face, FaceReading::solid(face.color()));
        }
        for color in Color::ALL {
            assert_eq!(store.sticker_count(color), 9);
        }
    }

    #[test]
    fn reset_clears_all_slots() {
        let mut store = CubeState::new();
        for face in FaceId::STORE_ORDER {
            store.set(face, FaceReading::solid(face.color()));
        }
        store.reset();
        assert_eq!(store.scanned_count(), 0);
        assert_eq!(store.missing_faces().len(), 6);
    }
}
