//! Stable descending ranking.

use std::cmp::Ordering;

use serde::Serialize;

use affinity_core::models::{RoleId, ScoredRole};

/// Scored roles ordered by score, highest first. Position 0 is the top rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedRoles {
    roles: Vec<ScoredRole>,
}

impl RankedRoles {
    pub fn as_slice(&self) -> &[ScoredRole] {
        &self.roles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredRole> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ScoredRole> {
        self.roles.get(position)
    }

    /// The top-ranked role.
    pub fn top(&self) -> Option<&ScoredRole> {
        self.roles.first()
    }

    /// The bottom-ranked role.
    pub fn bottom(&self) -> Option<&ScoredRole> {
        self.roles.last()
    }

    pub fn highest_score(&self) -> Option<f64> {
        self.top().map(|r| r.score)
    }

    pub fn lowest_score(&self) -> Option<f64> {
        self.bottom().map(|r| r.score)
    }

    /// Rank position of a role, if it is part of this ranking.
    pub fn position_of(&self, id: &RoleId) -> Option<usize> {
        self.roles.iter().position(|r| r.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &RoleId> {
        self.roles.iter().map(|r| r.id())
    }
}

impl<'a> IntoIterator for &'a RankedRoles {
    type Item = &'a ScoredRole;
    type IntoIter = std::slice::Iter<'a, ScoredRole>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}

/// Rank scored roles by score, descending.
///
/// The sort is stable: equal scores keep their input (catalog) order, so
/// identical inputs always produce the same positions.
pub fn rank(scored: &[ScoredRole]) -> RankedRoles {
    let mut roles = scored.to_vec();
    roles.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    RankedRoles { roles }
}
