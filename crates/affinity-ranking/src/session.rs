//! Presentation-side selection state over a computed breakdown.

use affinity_core::errors::BreakdownError;
use affinity_core::models::{AlignmentTier, RoleId, ScoredRole};

use crate::breakdown::{Breakdown, BreakdownEntry};

/// Tracks which role is selected and which tier tab is active.
///
/// The selection always names a role of the current breakdown. It starts at
/// the top-ranked role (none for an empty breakdown) with the core tab active.
#[derive(Debug, Clone)]
pub struct BreakdownSession {
    breakdown: Breakdown,
    selected: Option<RoleId>,
    active_tier: AlignmentTier,
}

impl BreakdownSession {
    pub fn new(breakdown: Breakdown) -> Self {
        let selected = breakdown.top_role().map(|r| r.id().clone());
        Self {
            breakdown,
            selected,
            active_tier: AlignmentTier::Core,
        }
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn selected_id(&self) -> Option<&RoleId> {
        self.selected.as_ref()
    }

    pub fn active_tier(&self) -> AlignmentTier {
        self.active_tier
    }

    /// Select a role; the active tab follows the role's tier.
    pub fn select(&mut self, id: &RoleId) -> Result<AlignmentTier, BreakdownError> {
        let tier = self.breakdown.tier_of(id)?;
        self.selected = Some(id.clone());
        self.active_tier = tier;
        Ok(tier)
    }

    /// Switch tabs without changing the selected role.
    pub fn select_tier(&mut self, tier: AlignmentTier) {
        self.active_tier = tier;
    }

    pub fn selected_role(&self) -> Option<&ScoredRole> {
        let id = self.selected.as_ref()?;
        self.breakdown.role(id).ok()
    }

    pub fn selected_entry(&self) -> Option<BreakdownEntry<'_>> {
        let id = self.selected.as_ref()?;
        self.breakdown.entry(id).ok()
    }

    /// Narrative text for the selected role.
    pub fn selected_description(&self) -> Option<&str> {
        let id = self.selected.as_ref()?;
        self.breakdown.describe(id).ok()
    }

    /// Roles shown under the active tab.
    pub fn visible_roles(&self) -> Vec<&ScoredRole> {
        self.breakdown.roles_in_tier(self.active_tier)
    }

    /// Replace the breakdown after the inputs changed.
    ///
    /// The selection is kept if the role is still ranked, otherwise it resets
    /// to the new top role. The tab is reset to the selection's tier.
    pub fn replace_breakdown(&mut self, breakdown: Breakdown) {
        let keep = self
            .selected
            .as_ref()
            .filter(|id| breakdown.contains(id))
            .cloned();
        self.breakdown = breakdown;
        self.selected = keep.or_else(|| self.breakdown.top_role().map(|r| r.id().clone()));
        self.active_tier = self
            .selected
            .as_ref()
            .and_then(|id| self.breakdown.tier_of(id).ok())
            .unwrap_or(AlignmentTier::Core);
    }
}
