use serde::{Deserialize, Serialize};

use super::defaults;

/// Tier window sizes for the alignment classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Number of top-ranked roles classified as `core`.
    pub core_count: usize,
    /// Number of bottom-ranked roles classified as `peripheral`.
    pub peripheral_count: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            core_count: defaults::DEFAULT_CORE_COUNT,
            peripheral_count: defaults::DEFAULT_PERIPHERAL_COUNT,
        }
    }
}
