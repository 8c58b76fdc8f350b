// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Size of the generated surface when a request does not carry one.
pub const DEFAULT_SCALE: Real = 1.0;

/// Samples per parametric axis when a request does not carry a segment count.
pub const DEFAULT_RESOLUTION: i64 = 10;

/// Smallest resolution that still yields one row of quads to stitch.
pub const MIN_RESOLUTION: usize = 2;
