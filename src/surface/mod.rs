//! Parametric fractal-surface samplers
//!
//! Every surface walks a parameter grid, evaluates a closed-form point per cell, drops
//! non-finite candidates and stitches triangles over grid coordinate space (see [`grid`]).
//! Sampling runs through a [`SamplingOps`] backend, serial by default or rayon-backed with the
//! `parallel` feature.

pub mod grid;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub mod apollonian_gasket;
pub mod klein_bottle;
pub mod mandelbox;
pub mod mandelbulb;
pub mod torus_knot;

// Re-export core types
pub use apollonian_gasket::ApollonianGasket;
pub use klein_bottle::KleinBottle;
pub use mandelbox::Mandelbox;
pub use mandelbulb::Mandelbulb;
pub use torus_knot::TorusKnot;
pub use traits::{SamplingOps, Surface};

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSamplingOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSamplingOps;

use crate::errors::GenerationError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::params::{Resolution, Scale};
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

#[inline]
pub(crate) fn point_finite(p: &Point3<Real>) -> bool {
    p.coords.iter().all(|&c| c.is_finite())
}

/// Warning text for a sampling pass that dropped samples, `None` if every candidate was kept.
pub(crate) fn rejection_warning(kind: SurfaceKind, candidates: usize, kept: usize) -> Option<String> {
    (kept < candidates).then(|| {
        format!(
            "{kind}: dropped {} of {candidates} non-finite samples; face indices no longer match vertex positions",
            candidates - kept
        )
    })
}

/// Sample an `R × R` grid with the enabled backend.
pub(crate) fn sample_grid<F>(kind: SurfaceKind, resolution: Resolution, point: F) -> Vec<Point3<Real>>
where
    F: Fn(usize, usize) -> Point3<Real> + Sync + Send,
{
    #[cfg(not(feature = "parallel"))]
    let ops = SerialSamplingOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelSamplingOps::new();

    let vertices = ops.sample_grid(resolution, point);
    if let Some(warning) = rejection_warning(kind, resolution.get().saturating_pow(2), vertices.len()) {
        log::warn!("{warning}");
    }
    vertices
}

/// Sample an `R × R × R` lattice with the enabled backend.
pub(crate) fn sample_lattice<F>(kind: SurfaceKind, resolution: Resolution, point: F) -> Vec<Point3<Real>>
where
    F: Fn(usize, usize, usize) -> Point3<Real> + Sync + Send,
{
    #[cfg(not(feature = "parallel"))]
    let ops = SerialSamplingOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelSamplingOps::new();

    let vertices = ops.sample_lattice(resolution, point);
    if let Some(warning) = rejection_warning(kind, resolution.get().saturating_pow(3), vertices.len()) {
        log::warn!("{warning}");
    }
    vertices
}

/// The closed set of surfaces the service can generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Mandelbulb,
    Mandelbox,
    TorusKnot,
    ApollonianGasket,
    KleinBottle,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 5] = [
        SurfaceKind::Mandelbulb,
        SurfaceKind::Mandelbox,
        SurfaceKind::TorusKnot,
        SurfaceKind::ApollonianGasket,
        SurfaceKind::KleinBottle,
    ];

    /// Wire name, as accepted in the request `type` field.
    pub const fn name(self) -> &'static str {
        match self {
            SurfaceKind::Mandelbulb => "mandelbulb",
            SurfaceKind::Mandelbox => "mandelbox",
            SurfaceKind::TorusKnot => "torus_knot",
            SurfaceKind::ApollonianGasket => "apollonian_gasket",
            SurfaceKind::KleinBottle => "klein_bottle",
        }
    }

    /// Human readable name: underscores become spaces, first character upper-cased and the rest
    /// lower-cased (`"torus_knot"` -> `"Torus knot"`).
    pub fn display_name(self) -> String {
        let spaced = self.name().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }

    /// Number of candidate samples the sampler evaluates, or `None` if it overflows `usize`.
    pub fn sample_count(self, resolution: Resolution) -> Option<usize> {
        let n = resolution.get();
        match self {
            SurfaceKind::Mandelbox => n.checked_pow(3),
            _ => n.checked_pow(2),
        }
    }

    /// Run the sampler registered for this kind.
    pub fn sample(self, scale: Scale, resolution: Resolution) -> Mesh {
        match self {
            SurfaceKind::Mandelbulb => Mandelbulb.sample(scale, resolution),
            SurfaceKind::Mandelbox => Mandelbox.sample(scale, resolution),
            SurfaceKind::TorusKnot => TorusKnot.sample(scale, resolution),
            SurfaceKind::ApollonianGasket => ApollonianGasket.sample(scale, resolution),
            SurfaceKind::KleinBottle => KleinBottle.sample(scale, resolution),
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = GenerationError;

    /// Exact, case-sensitive match against [`SurfaceKind::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurfaceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GenerationError::UnknownSurfaceKind(s.to_string()))
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_warning_names_the_surface() {
        assert_eq!(rejection_warning(SurfaceKind::TorusKnot, 16, 16), None);
        let warning = rejection_warning(SurfaceKind::Mandelbox, 64, 1).unwrap();
        assert!(warning.starts_with("mandelbox: dropped 63 of 64"), "{warning}");
    }
}
