//! Parallel implementation of grid sampling.
//!
//! Rows of the outer axis are evaluated on the rayon pool. `collect` keeps rayon's sequential
//! ordering, so the output matches the serial backend element for element.

use crate::float_types::Real;
use crate::params::Resolution;
use crate::surface::point_finite;
use crate::surface::traits::SamplingOps;
use nalgebra::Point3;
use rayon::prelude::*;

/// Rayon-backed sampling backend.
pub struct ParallelSamplingOps;

impl ParallelSamplingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelSamplingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingOps for ParallelSamplingOps {
    fn sample_grid<F>(&self, resolution: Resolution, point: F) -> Vec<Point3<Real>>
    where
        F: Fn(usize, usize) -> Point3<Real> + Sync + Send,
    {
        let n = resolution.get();
        let point = &point;
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| (0..n).map(move |j| point(i, j)).filter(point_finite))
            .collect()
    }

    fn sample_lattice<F>(&self, resolution: Resolution, point: F) -> Vec<Point3<Real>>
    where
        F: Fn(usize, usize, usize) -> Point3<Real> + Sync + Send,
    {
        let n = resolution.get();
        let point = &point;
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                (0..n)
                    .flat_map(move |j| (0..n).map(move |k| point(i, j, k)))
                    .filter(point_finite)
            })
            .collect()
    }
}
