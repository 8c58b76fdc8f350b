//! Serial implementation of grid sampling

use crate::float_types::Real;
use crate::params::Resolution;
use crate::surface::point_finite;
use crate::surface::traits::SamplingOps;
use nalgebra::Point3;

/// Single-threaded sampling backend.
pub struct SerialSamplingOps;

impl SerialSamplingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialSamplingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingOps for SerialSamplingOps {
    fn sample_grid<F>(&self, resolution: Resolution, point: F) -> Vec<Point3<Real>>
    where
        F: Fn(usize, usize) -> Point3<Real> + Sync + Send,
    {
        let n = resolution.get();
        let mut vertices = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let p = point(i, j);
                if point_finite(&p) {
                    vertices.push(p);
                }
            }
        }
        vertices
    }

    fn sample_lattice<F>(&self, resolution: Resolution, point: F) -> Vec<Point3<Real>>
    where
        F: Fn(usize, usize, usize) -> Point3<Real> + Sync + Send,
    {
        let n = resolution.get();
        let mut vertices = Vec::with_capacity(n * n * n);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let p = point(i, j, k);
                    if point_finite(&p) {
                        vertices.push(p);
                    }
                }
            }
        }
        vertices
    }
}
