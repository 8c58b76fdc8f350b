//! Request dispatch: validate, pick a surface, sample, flatten and audit.
//!
//! [`handle`] is the whole pipeline. It is also available in two halves, [`prepare`] and
//! [`GenerationJob::run`], so a caller can inspect the validated job (for example to bound the
//! amount of work) before any sampling happens.

use crate::errors::GenerationError;
use crate::float_types::{DEFAULT_RESOLUTION, DEFAULT_SCALE, Real};
use crate::params::{self, Resolution, Scale};
use crate::surface::SurfaceKind;
use serde::{Deserialize, Serialize};

/// Decoded request fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateRequest {
    /// Surface kind name
    #[serde(rename = "type", default)]
    pub kind: String,
    pub size: Option<Real>,
    pub segments: Option<i64>,
    /// Pick the resolution from a desired vertex count instead of `segments`.
    pub target_vertices: Option<u64>,
    /// Pick the resolution from a desired face count instead of `segments`.
    pub target_faces: Option<u64>,
}

impl GenerateRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn scale(&self) -> Real {
        self.size.unwrap_or(DEFAULT_SCALE)
    }

    /// Effective segment count. `target_vertices` wins over `target_faces`, which wins over
    /// `segments`. A target of zero is still a target and clamps to the smallest grid.
    pub fn resolution(&self) -> i64 {
        match self.target_vertices.or(self.target_faces) {
            Some(target) => Resolution::for_target_count(target).get() as i64,
            None => self.segments.unwrap_or(DEFAULT_RESOLUTION),
        }
    }
}

/// Successful generation, shaped for the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedModel {
    pub vertices: Vec<Real>,
    pub faces: Vec<usize>,
    pub message: String,
}

/// A validated request, ready to sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationJob {
    pub kind: SurfaceKind,
    pub scale: Scale,
    pub resolution: Resolution,
}

/// Validate `scale`/`resolution` first, then resolve `kind`.
pub fn prepare(kind: &str, scale: Real, resolution: i64) -> Result<GenerationJob, GenerationError> {
    let (scale, resolution) = params::validate(scale, resolution)?;
    let kind: SurfaceKind = kind.parse()?;
    Ok(GenerationJob {
        kind,
        scale,
        resolution,
    })
}

impl GenerationJob {
    /// Candidate samples this job will evaluate; see [`SurfaceKind::sample_count`].
    pub fn sample_count(&self) -> Option<usize> {
        self.kind.sample_count(self.resolution)
    }

    pub fn run(self) -> Result<GeneratedModel, GenerationError> {
        let mesh = self.kind.sample(self.scale, self.resolution);
        log::debug!(
            "{} (size={}, segments={}): {} vertices, {} faces",
            self.kind,
            self.scale.get(),
            self.resolution.get(),
            mesh.vertex_count(),
            mesh.face_count()
        );

        let flat = mesh.flatten();
        if let Err(err) = flat.audit() {
            log::error!("{}: {err}", self.kind);
            return Err(err);
        }

        Ok(GeneratedModel {
            vertices: flat.vertices,
            faces: flat.faces,
            message: format!("{} generated successfully!", self.kind.display_name()),
        })
    }
}

/// Generate the mesh for `kind` with optional `scale` (default 1.0) and `resolution`
/// (default 10).
pub fn handle(
    kind: &str,
    scale: Option<Real>,
    resolution: Option<i64>,
) -> Result<GeneratedModel, GenerationError> {
    prepare(
        kind,
        scale.unwrap_or(DEFAULT_SCALE),
        resolution.unwrap_or(DEFAULT_RESOLUTION),
    )?
    .run()
}

/// [`handle`] driven by a decoded request, honouring target-count sizing.
pub fn handle_request(request: &GenerateRequest) -> Result<GeneratedModel, GenerationError> {
    prepare(&request.kind, request.scale(), request.resolution())?.run()
}
