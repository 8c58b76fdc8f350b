//! Traits shared by every surface sampler and sampling backend

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::params::{Resolution, Scale};
use nalgebra::Point3;

/// A parametric surface that can be sampled into a [`Mesh`].
///
/// Implementations are pure: the same `(scale, resolution)` always yields the same mesh, and
/// sampling never fails. Candidate points with a non-finite coordinate are dropped.
pub trait Surface {
    fn sample(&self, scale: Scale, resolution: Resolution) -> Mesh;
}

/// Walks a parameter grid and keeps the finite candidate points in scan order.
pub trait SamplingOps {
    /// Sample an `R × R` grid, `i` outer and `j` inner.
    fn sample_grid<F>(&self, resolution: Resolution, point: F) -> Vec<Point3<Real>>
    where
        F: Fn(usize, usize) -> Point3<Real> + Sync + Send;

    /// Sample an `R × R × R` lattice, `i` outermost and `k` innermost.
    fn sample_lattice<F>(&self, resolution: Resolution, point: F) -> Vec<Point3<Real>>
    where
        F: Fn(usize, usize, usize) -> Point3<Real> + Sync + Send;
}
