use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the role catalog is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CATALOG_PATH.to_string(),
        }
    }
}

/// Where the JSON-backed results store is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    pub path: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_RESULTS_PATH.to_string(),
        }
    }
}
