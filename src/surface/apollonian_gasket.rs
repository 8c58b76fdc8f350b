//! Gasket-like surface: a sphere whose radius swells four times from pole to pole.

use crate::float_types::{PI, Real, TAU};
use crate::mesh::Mesh;
use crate::params::{Resolution, Scale};
use crate::surface::grid::{GridSlots, RowStep, stitch_grid};
use crate::surface::{SurfaceKind, sample_grid};
use crate::surface::traits::Surface;
use nalgebra::Point3;

#[derive(Clone, Copy, Debug, Default)]
pub struct ApollonianGasket;

impl Surface for ApollonianGasket {
    fn sample(&self, scale: Scale, resolution: Resolution) -> Mesh {
        let size = scale.get();
        let n = resolution.get() as Real;

        let vertices = sample_grid(SurfaceKind::ApollonianGasket, resolution, |i, j| {
            let theta = PI * i as Real / n;
            let phi = TAU * j as Real / n;
            let r = size * (1.0 + 0.5 * (4.0 * theta).cos());
            Point3::new(
                r * theta.sin() * phi.cos(),
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
            )
        });
        let faces = stitch_grid(resolution, RowStep::Straight, &GridSlots);

        Mesh::from_parts(vertices, faces)
    }
}
