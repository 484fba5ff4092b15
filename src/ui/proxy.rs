//! 27-cell cube proxy
//!
//! The proxy is the logical stand-in for the rendered 3D mesh: a 3x3x3
//! lattice of unit cells, each exposing six facet color slots. The scan
//! session writes sticker colors into it on every commit; the preview
//! renderer reads it back. An unset facet renders as a dim placeholder.

use glam::IVec3;

use crate::domain::face::{Color, FaceId, FaceReading};

/// Outward normal of a face in lattice coordinates
pub fn face_normal(face: FaceId) -> IVec3 {
    match face {
        FaceId::Right => IVec3::new(1, 0, 0),
        FaceId::Left => IVec3::new(-1, 0, 0),
        FaceId::Up => IVec3::new(0, 1, 0),
        FaceId::Down => IVec3::new(0, -1, 0),
        FaceId::Front => IVec3::new(0, 0, 1),
        FaceId::Back => IVec3::new(0, 0, -1),
    }
}

/// Lattice cell holding a raster-order sticker of a face
///
/// `index` is the raster position 0..9 (row-major, top-left to bottom-right
/// as seen when looking straight at that face from outside the cube). Back
/// mirrors horizontally; Up and Down read along the z axis.
pub fn cell_for_sticker(face: FaceId, index: usize) -> IVec3 {
    let row = (index / 3) as i32 - 1;
    let col = (index % 3) as i32 - 1;
    match face {
        FaceId::Front => IVec3::new(col, -row, 1),
        FaceId::Back => IVec3::new(-col, -row, -1),
        FaceId::Right => IVec3::new(1, -row, -col),
        FaceId::Left => IVec3::new(-1, -row, col),
        FaceId::Up => IVec3::new(col, 1, row),
        FaceId::Down => IVec3::new(col, -1, -row),
    }
}

/// One cell of the proxy lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyCell {
    /// Lattice position, each component in {-1, 0, 1}
    pub position: IVec3,
    facets: [Option<Color>; 6],
}

impl ProxyCell {
    fn new(position: IVec3) -> Self {
        Self {
            position,
            facets: [None; 6],
        }
    }

    /// Color written to the facet slot facing `face`, if any
    pub fn facet(&self, face: FaceId) -> Option<Color> {
        self.facets[face.facet_index()]
    }
}

/// The full 27-cell lattice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeProxy {
    cells: Vec<ProxyCell>,
}

impl CubeProxy {
    /// Creates the lattice with every facet unset
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(27);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    cells.push(ProxyCell::new(IVec3::new(x, y, z)));
                }
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[ProxyCell] {
        &self.cells
    }

    // Cells are pushed in x-major order, so a lattice position maps straight
    // to its index
    fn cell_index(position: IVec3) -> usize {
        ((position.x + 1) * 9 + (position.y + 1) * 3 + (position.z + 1)) as usize
    }

    fn cell_mut(&mut self, position: IVec3) -> &mut ProxyCell {
        &mut self.cells[Self::cell_index(position)]
    }

    /// Color written to one facet of one cell, if any
    pub fn facet(&self, position: IVec3, face: FaceId) -> Option<Color> {
        self.cells[Self::cell_index(position)].facet(face)
    }

    /// Seeds the center indicator of every logical face
    ///
    /// After the first scan the rendered cube shows a fully-labeled skeleton:
    /// each face's center cell carries its identity color even though only
    /// one face's stickers are real yet.
    pub fn fill_centers(&mut self) {
        for face in FaceId::STORE_ORDER {
            let cell = self.cell_mut(face_normal(face));
            cell.facets[face.facet_index()] = Some(face.color());
        }
    }

    /// Writes a committed reading onto the face's nine cells
    pub fn apply_reading(&mut self, face: FaceId, reading: &FaceReading) {
        let facet = face.facet_index();
        for (index, sticker) in reading.stickers().iter().enumerate() {
            let cell = self.cell_mut(cell_for_sticker(face, index));
            cell.facets[facet] = Some(*sticker);
        }
    }

    /// Number of facet slots holding a color
    pub fn colored_facet_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.facets.iter().flatten().count())
            .sum()
    }
}

impl Default for CubeProxy {
    fn default() -> Self {
        Self::new()
    }
}
