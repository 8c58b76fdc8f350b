//! Knot-like surface: a tube wound `q = 3` times around the axis while its radius pulses `p = 2`
//! times.

use crate::float_types::{Real, TAU};
use crate::mesh::Mesh;
use crate::params::{Resolution, Scale};
use crate::surface::grid::{GridSlots, RowStep, stitch_grid};
use crate::surface::{SurfaceKind, sample_grid};
use crate::surface::traits::Surface;
use nalgebra::Point3;

const RADIUS_LOBES: Real = 2.0;
const WINDINGS: Real = 3.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct TorusKnot;

impl Surface for TorusKnot {
    fn sample(&self, scale: Scale, resolution: Resolution) -> Mesh {
        let size = scale.get();
        let n = resolution.get() as Real;

        let vertices = sample_grid(SurfaceKind::TorusKnot, resolution, |i, j| {
            let theta = i as Real * TAU / n;
            let phi = j as Real * TAU / n;
            let r = size + 0.2 * size * (RADIUS_LOBES * theta).cos();
            Point3::new(
                r * (WINDINGS * theta).cos() * phi.cos(),
                r * (WINDINGS * theta).sin() * phi.cos(),
                size * phi.sin(),
            )
        });
        let faces = stitch_grid(resolution, RowStep::Wrapped, &GridSlots);

        Mesh::from_parts(vertices, faces)
    }
}
