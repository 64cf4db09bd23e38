use serde::{Deserialize, Serialize};

use super::{Role, RoleId};

/// A catalog role paired with the user's score for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRole {
    #[serde(flatten)]
    pub role: Role,
    pub score: f64,
}

impl ScoredRole {
    pub fn new(role: Role, score: f64) -> Self {
        Self { role, score }
    }

    pub fn id(&self) -> &RoleId {
        &self.role.id
    }
}
