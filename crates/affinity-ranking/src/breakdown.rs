//! The computed breakdown handed to the presentation layer.

use serde::Serialize;
use tracing::debug;

use affinity_core::errors::BreakdownError;
use affinity_core::models::{AlignmentTier, NarrativeVariant, ResultSet, Role, RoleId, ScoredRole};

use crate::alignment::AlignmentRules;
use crate::join::join;
use crate::narrative::{self, NarrativeFacts};
use crate::rank::{rank, RankedRoles};
use crate::scale;

/// Everything the presentation layer needs to render one role.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownEntry<'a> {
    pub role: &'a ScoredRole,
    /// 0-based rank position.
    pub rank: usize,
    pub tier: AlignmentTier,
    pub variant: NarrativeVariant,
    pub narrative: &'a str,
    /// Position on the Low-High scale, `[0, 100]`.
    pub scale_position: f64,
}

/// An immutable ranking plus the tier windows it is classified with.
///
/// Tiers and narratives are derived on demand from rank positions; nothing
/// is cached, so a new breakdown must be computed whenever the inputs change.
#[derive(Debug, Clone, Default)]
pub struct Breakdown {
    ranked: RankedRoles,
    rules: AlignmentRules,
}

impl Breakdown {
    pub fn new(ranked: RankedRoles, rules: AlignmentRules) -> Self {
        Self { ranked, rules }
    }

    pub fn ranked(&self) -> &RankedRoles {
        &self.ranked
    }

    pub fn rules(&self) -> &AlignmentRules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn top_role(&self) -> Option<&ScoredRole> {
        self.ranked.top()
    }

    pub fn highest_score(&self) -> Option<f64> {
        self.ranked.highest_score()
    }

    pub fn lowest_score(&self) -> Option<f64> {
        self.ranked.lowest_score()
    }

    pub fn contains(&self, id: &RoleId) -> bool {
        self.ranked.position_of(id).is_some()
    }

    /// Rank position of a role.
    pub fn position_of(&self, id: &RoleId) -> Result<usize, BreakdownError> {
        self.ranked
            .position_of(id)
            .ok_or_else(|| BreakdownError::SelectionNotFound {
                role_id: id.to_string(),
            })
    }

    pub fn role(&self, id: &RoleId) -> Result<&ScoredRole, BreakdownError> {
        let position = self.position_of(id)?;
        Ok(&self.ranked.as_slice()[position])
    }

    pub fn tier_of(&self, id: &RoleId) -> Result<AlignmentTier, BreakdownError> {
        self.rules.tier_of(&self.ranked, id)
    }

    /// Selected narrative variant and its text.
    pub fn narrative(&self, id: &RoleId) -> Result<(NarrativeVariant, &str), BreakdownError> {
        let entry = self.entry(id)?;
        Ok((entry.variant, entry.narrative))
    }

    /// Selected narrative text.
    pub fn describe(&self, id: &RoleId) -> Result<&str, BreakdownError> {
        self.narrative(id).map(|(_, text)| text)
    }

    pub fn scale_position(&self, id: &RoleId) -> Result<f64, BreakdownError> {
        self.entry(id).map(|entry| entry.scale_position)
    }

    pub fn entry(&self, id: &RoleId) -> Result<BreakdownEntry<'_>, BreakdownError> {
        let position = self.position_of(id)?;
        Ok(self.entry_at(position))
    }

    /// One entry per role, in rank order.
    pub fn entries(&self) -> Vec<BreakdownEntry<'_>> {
        (0..self.ranked.len()).map(|p| self.entry_at(p)).collect()
    }

    /// Roles in `tier`, in rank order.
    pub fn roles_in_tier(&self, tier: AlignmentTier) -> Vec<&ScoredRole> {
        self.rules.roles_in_tier(&self.ranked, tier)
    }

    // `position` must be in range; callers obtain it from the ranking itself.
    fn entry_at(&self, position: usize) -> BreakdownEntry<'_> {
        let roles = self.ranked.as_slice();
        let role = &roles[position];
        let highest = roles[0].score;
        let lowest = roles[roles.len() - 1].score;
        let tier = self.rules.classify(position, roles.len());
        let variant = narrative::variant_for(&NarrativeFacts {
            score: role.score,
            highest,
            lowest,
            tier,
        });

        BreakdownEntry {
            role,
            rank: position,
            tier,
            variant,
            narrative: narrative::variant_text(role, variant),
            scale_position: scale::scale_position(role.score, lowest, highest),
        }
    }
}

/// Join, rank, and wrap the result for classification and narrative lookup.
///
/// `roles` must be the full catalog in catalog order. An empty catalog gives
/// an empty breakdown.
pub fn compute_breakdown(roles: &[Role], results: &ResultSet, rules: AlignmentRules) -> Breakdown {
    let scored = join(roles, results);
    let ranked = rank(&scored);
    debug!(
        roles = ranked.len(),
        highest = ?ranked.highest_score(),
        lowest = ?ranked.lowest_score(),
        "ranked roles"
    );
    Breakdown::new(ranked, rules)
}
