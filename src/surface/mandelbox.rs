//! Box-like surface: a dense lattice filling the cube `[-S, S]³`.
//!
//! No box-fold iteration is performed; every lattice point is emitted as a vertex.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::params::{Resolution, Scale};
use crate::surface::grid::{GridSlots, stitch_lattice};
use crate::surface::{SurfaceKind, sample_lattice};
use crate::surface::traits::Surface;
use nalgebra::Point3;

#[derive(Clone, Copy, Debug, Default)]
pub struct Mandelbox;

/// The `idx`-th of `count` evenly spaced values over `[start, stop]`.
///
/// The last value is exactly `stop` rather than an accumulated `start + (count-1)·step`.
pub fn linspace(start: Real, stop: Real, count: usize, idx: usize) -> Real {
    if idx + 1 == count {
        return stop;
    }
    let step = (stop - start) / (count - 1) as Real;
    start + idx as Real * step
}

impl Surface for Mandelbox {
    fn sample(&self, scale: Scale, resolution: Resolution) -> Mesh {
        let size = scale.get();
        let n = resolution.get();

        let vertices = sample_lattice(SurfaceKind::Mandelbox, resolution, |i, j, k| {
            Point3::new(
                linspace(-size, size, n, i),
                linspace(-size, size, n, j),
                linspace(-size, size, n, k),
            )
        });
        let faces = stitch_lattice(resolution, &GridSlots);

        Mesh::from_parts(vertices, faces)
    }
}
