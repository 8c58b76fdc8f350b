//! Test support library
//! Provides various helper functions & utilities for tests.

use fractalmesh::float_types::Real;
use fractalmesh::params::{Resolution, Scale, validate};
use nalgebra::Point3;

/// Validated `(scale, resolution)` pair, panicking on bad input.
pub fn params(scale: Real, resolution: i64) -> (Scale, Resolution) {
    validate(scale, resolution).expect("test parameters should be valid")
}

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]` of a point set.
pub fn bounding_box(points: &[Point3<Real>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for p in points {
        for axis in 0..3 {
            bb[axis] = bb[axis].min(p[axis]);
            bb[axis + 3] = bb[axis + 3].max(p[axis]);
        }
    }
    bb
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
