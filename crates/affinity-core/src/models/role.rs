use serde::{Deserialize, Serialize};

use super::RoleId;

/// A role in the assessment catalog, with its pre-authored narrative variants.
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    /// Display name.
    pub name: String,
    /// Default narrative, used for intermediate-tier roles.
    pub role_desc: String,
    pub core_drive: String,
    /// "You feel most like you when..." text.
    pub most_like_when: String,
    /// Narrative for roles inside the core window.
    pub high_rank_desc: String,
    /// Narrative for roles inside the peripheral window.
    pub low_rank_desc: String,
    /// Narrative for roles tied for the highest score.
    pub top_rank_desc: String,
    /// Narrative for roles tied for the lowest score.
    pub bottom_rank_desc: String,
}
