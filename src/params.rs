//! Validated generation parameters.

use crate::errors::GenerationError;
use crate::float_types::{MIN_RESOLUTION, Real};

/// Overall extent of a generated surface. Always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(Real);

impl Scale {
    pub const fn get(self) -> Real {
        self.0
    }
}

/// Number of samples taken along each parametric axis. Always at least two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(usize);

impl Resolution {
    pub const fn get(self) -> usize {
        self.0
    }

    /// Resolution whose square grid holds roughly `target` samples: `max(2, floor(sqrt(target)))`.
    pub fn for_target_count(target: u64) -> Self {
        // isqrt on the integer avoids the float rounding of sqrt near perfect squares
        let root = target.isqrt() as usize;
        Resolution(root.max(MIN_RESOLUTION))
    }
}

/// Check a raw (scale, resolution) pair, failing with
/// [`GenerationError::InvalidParameters`] when either is out of domain.
pub fn validate(scale: Real, resolution: i64) -> Result<(Scale, Resolution), GenerationError> {
    let invalid = || GenerationError::InvalidParameters { scale, resolution };

    if !scale.is_finite() || scale <= 0.0 {
        return Err(invalid());
    }
    let resolution_usize = usize::try_from(resolution).map_err(|_| invalid())?;
    if resolution_usize < MIN_RESOLUTION {
        return Err(invalid());
    }

    Ok((Scale(scale), Resolution(resolution_usize)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_smallest_valid_pair() {
        let (scale, resolution) = validate(0.001, 2).unwrap();
        assert_eq!(scale.get(), 0.001);
        assert_eq!(resolution.get(), 2);
    }

    #[test]
    fn rejects_non_positive_scale() {
        for scale in [0.0, -1.0, Real::NAN, Real::INFINITY] {
            assert!(matches!(
                validate(scale, 10),
                Err(GenerationError::InvalidParameters { .. })
            ));
        }
    }

    #[test]
    fn rejects_small_or_negative_resolution() {
        for resolution in [-5, 0, 1] {
            assert_eq!(
                validate(1.0, resolution),
                Err(GenerationError::InvalidParameters { scale: 1.0, resolution })
            );
        }
    }

    #[test]
    fn target_count_takes_floor_of_root() {
        assert_eq!(Resolution::for_target_count(100).get(), 10);
        assert_eq!(Resolution::for_target_count(99).get(), 9);
        assert_eq!(Resolution::for_target_count(3).get(), 2);
        assert_eq!(Resolution::for_target_count(0).get(), 2);
    }
}
