//! Procedural **fractal-surface meshes** behind a single HTTP endpoint.
//!
//! Given a surface kind, a size and a segment count, a sampler walks a parameter grid, keeps the
//! finite points and stitches triangles over the grid. The result goes out as two flat arrays:
//! `x,y,z` positions and `a,b,c` triangle indices.
//!
//! ```
//! let model = fractalmesh::dispatch::handle("torus_knot", Some(1.0), Some(4)).unwrap();
//! assert_eq!(model.vertices.len(), 48);
//! assert_eq!(model.faces.len(), 54);
//! assert_eq!(model.message, "Torus knot generated successfully!");
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **server**: the axum HTTP boundary and the `fractalmesh` binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sample grid rows in parallel

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod params;
pub mod surface;

#[cfg(feature = "server")]
pub mod server;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use dispatch::{GenerateRequest, GeneratedModel, handle};
pub use errors::GenerationError;
pub use mesh::{FlatMesh, Mesh};
pub use surface::{Surface, SurfaceKind};
