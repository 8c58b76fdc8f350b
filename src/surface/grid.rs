//! Triangle stitching over grid coordinate space.
//!
//! Stitching never looks at the sampled vertices. Every quad of the parameter grid becomes two
//! triangles whose corners are linear *grid cell* indices, routed through a [`SlotMap`] to obtain
//! the index written into the face.
//!
//! ## Known defect: index drift under rejection
//! Samplers drop non-finite candidates instead of keeping a placeholder, so once any cell has been
//! rejected the compacted vertex position of every later cell is smaller than its grid index.
//! [`GridSlots`] reproduces the historical wire output, which writes grid indices unchanged and so
//! can reference the wrong vertex or run past the end of the vertex list. A corrected mapping
//! (grid cell to compacted position) only needs a new [`SlotMap`] implementation. Which behaviour
//! the service should ship is an open product decision.
//! ```text
//! cell (i, j)    first = i·R + j
//!   first ──── first+1
//!     │      ╱   │
//!   second ── second+1
//! ```

use crate::mesh::Face;
use crate::params::Resolution;

/// Maps a linear grid cell index to the vertex index stored in a face.
pub trait SlotMap {
    fn slot(&self, cell: usize) -> usize;
}

/// Historical mapping: the grid cell index is used as the vertex index as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridSlots;

impl SlotMap for GridSlots {
    #[inline]
    fn slot(&self, cell: usize) -> usize {
        cell
    }
}

/// How the neighbouring row of a quad is located on a 2-D grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStep {
    /// `second = first + R`
    Straight,
    /// `second = ((i + 1) mod R)·R + j`; identical to `Straight` for the rows actually stitched.
    Wrapped,
}

#[inline]
fn push_quad<M: SlotMap>(faces: &mut Vec<Face>, slots: &M, first: usize, second: usize) {
    faces.push([slots.slot(first), slots.slot(second), slots.slot(first + 1)]);
    faces.push([slots.slot(second), slots.slot(second + 1), slots.slot(first + 1)]);
}

/// Stitch an `R × R` grid into `2·(R-1)²` triangles.
pub fn stitch_grid<M: SlotMap>(resolution: Resolution, step: RowStep, slots: &M) -> Vec<Face> {
    let n = resolution.get();
    let mut faces = Vec::with_capacity(2 * (n - 1) * (n - 1));
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let first = i * n + j;
            let second = match step {
                RowStep::Straight => first + n,
                RowStep::Wrapped => (i + 1) % n * n + j,
            };
            push_quad(&mut faces, slots, first, second);
        }
    }
    faces
}

/// Stitch an `R × R × R` lattice into `2·(R-1)³` triangles.
///
/// The second corner steps one `j` row (`first + R`), not one `i` layer, so each triangle lies in
/// a constant-`i` slice of the lattice.
pub fn stitch_lattice<M: SlotMap>(resolution: Resolution, slots: &M) -> Vec<Face> {
    let n = resolution.get();
    let cells = n - 1;
    let mut faces = Vec::with_capacity(2 * cells * cells * cells);
    for i in 0..cells {
        for j in 0..cells {
            for k in 0..cells {
                let first = i * n * n + j * n + k;
                let second = first + n;
                push_quad(&mut faces, slots, first, second);
            }
        }
    }
    faces
}
