//! Generation errors

use crate::float_types::Real;

/// All the ways a generation request can fail.
///
/// Per-sample rejection inside a sampler is filtering, not an error, and never shows up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// (InvalidParameters) Scale is not strictly positive or resolution is below two
    #[error("Invalid size or segments provided.")]
    InvalidParameters { scale: Real, resolution: i64 },
    /// (UnknownSurfaceKind) The requested surface name is not registered
    #[error("Fractal type '{0}' not recognized.")]
    UnknownSurfaceKind(String),
    /// (NonFiniteOutput) The flattened mesh contains a NaN or infinite value
    #[error("Generated data contains invalid values.")]
    NonFiniteOutput,
}

impl GenerationError {
    /// `true` when the request itself was at fault, `false` for internal defects.
    pub const fn is_caller_error(&self) -> bool {
        match self {
            GenerationError::InvalidParameters { .. } | GenerationError::UnknownSurfaceKind(_) => {
                true
            },
            GenerationError::NonFiniteOutput => false,
        }
    }
}

/// Problems loading the service configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}
