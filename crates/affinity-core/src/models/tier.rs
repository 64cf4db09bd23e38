use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AffinityError;

/// Coarse classification of a role's position in a user's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentTier {
    Core,
    Intermediate,
    Peripheral,
}

impl AlignmentTier {
    /// All tiers, in tab order.
    pub const ALL: [AlignmentTier; 3] = [Self::Core, Self::Intermediate, Self::Peripheral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Intermediate => "intermediate",
            Self::Peripheral => "peripheral",
        }
    }

    /// Alignment label shown next to a role: High / Intermediate / Low.
    pub fn alignment_label(self) -> &'static str {
        match self {
            Self::Core => "High",
            Self::Intermediate => "Intermediate",
            Self::Peripheral => "Low",
        }
    }
}

impl fmt::Display for AlignmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlignmentTier {
    type Err = AffinityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "intermediate" => Ok(Self::Intermediate),
            "peripheral" => Ok(Self::Peripheral),
            other => Err(AffinityError::InvalidTier {
                raw: other.to_string(),
            }),
        }
    }
}
