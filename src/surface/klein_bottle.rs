//! Bottle-like surface: a self-intersecting Klein-bottle immersion of radius `S/2`.

use crate::float_types::{Real, TAU};
use crate::mesh::Mesh;
use crate::params::{Resolution, Scale};
use crate::surface::grid::{GridSlots, RowStep, stitch_grid};
use crate::surface::{SurfaceKind, sample_grid};
use crate::surface::traits::Surface;
use nalgebra::Point3;

#[derive(Clone, Copy, Debug, Default)]
pub struct KleinBottle;

impl Surface for KleinBottle {
    fn sample(&self, scale: Scale, resolution: Resolution) -> Mesh {
        let r = scale.get() / 2.0;
        let n = resolution.get() as Real;

        let vertices = sample_grid(SurfaceKind::KleinBottle, resolution, |i, j| {
            let theta = TAU * i as Real / n;
            let phi = TAU * j as Real / n;
            let (sin_t, cos_t) = theta.sin_cos();
            let (sin_p, cos_p) = phi.sin_cos();
            Point3::new(
                r * (cos_t * (1.0 + sin_p) - sin_t * cos_p * cos_t),
                r * (sin_t * (1.0 + sin_p) + cos_t * cos_p * sin_t),
                r * cos_p * sin_p,
            )
        });
        let faces = stitch_grid(resolution, RowStep::Wrapped, &GridSlots);

        Mesh::from_parts(vertices, faces)
    }
}
