//! Configuration for the affinity breakdown, loaded from TOML.
//!
//! Every section and field is optional; anything missing falls back to
//! the values in [`defaults`].

mod alignment_config;
mod catalog_config;
pub mod defaults;
mod observability_config;

pub use alignment_config::AlignmentConfig;
pub use catalog_config::{CatalogConfig, ResultsConfig};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AffinityError, AffinityResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityConfig {
    pub alignment: AlignmentConfig,
    pub catalog: CatalogConfig,
    pub results: ResultsConfig,
    pub observability: ObservabilityConfig,
}

impl AffinityConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(input: &str) -> AffinityResult<Self> {
        toml::from_str(input).map_err(|e| AffinityError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> AffinityResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AffinityError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }
}
