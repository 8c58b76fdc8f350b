//! Service configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional JSON file named by
//! `FRACTALMESH_CONFIG`, and the `FRACTALMESH_BIND` / `FRACTALMESH_MAX_SAMPLES` variables.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "FRACTALMESH_CONFIG";
pub const BIND_ENV: &str = "FRACTALMESH_BIND";
pub const MAX_SAMPLES_ENV: &str = "FRACTALMESH_MAX_SAMPLES";

/// Runtime settings for the HTTP boundary. The generation core takes no configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Missing fields fall back to `Default`.
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub bind_address: String,
    /// Upper bound on candidate samples per request (`R²`, or `R³` for the lattice kind).
    pub max_samples: usize,
    /// Answer CORS preflight for any origin.
    pub allow_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            max_samples: 1 << 24,
            allow_cors: true,
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply environment overrides on top of `self`. `lookup` is `std::env::var` in production.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(BIND_ENV) {
            self.bind_address = bind;
        }
        if let Some(raw) = lookup(MAX_SAMPLES_ENV) {
            self.max_samples = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: MAX_SAMPLES_ENV,
                value: raw.clone(),
            })?;
        }
        Ok(self)
    }

    /// Defaults, then the optional config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                log::info!("Loading configuration from {path}");
                Self::from_file(path)?
            },
            Err(_) => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }
}
