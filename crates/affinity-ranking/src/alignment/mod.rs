//! Alignment classifier: core / intermediate / peripheral tiers by rank position.

pub mod rules;

use affinity_core::config::AlignmentConfig;
use affinity_core::errors::BreakdownError;
use affinity_core::models::{AlignmentTier, RoleId, ScoredRole};

use crate::rank::RankedRoles;

pub use rules::{TierRule, TIER_RULES};

/// Tier window sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentRules {
    /// Roles counted as core from the top.
    pub core_count: usize,
    /// Roles counted as peripheral from the bottom.
    pub peripheral_count: usize,
}

impl AlignmentRules {
    pub fn new(core_count: usize, peripheral_count: usize) -> Self {
        Self {
            core_count,
            peripheral_count,
        }
    }

    /// Tier of rank `position` in a ranking of `len` roles.
    ///
    /// Rules are checked in [`TIER_RULES`] order and the first match wins, so
    /// a position inside both windows is `Core`.
    pub fn classify(&self, position: usize, len: usize) -> AlignmentTier {
        TIER_RULES
            .iter()
            .find(|rule| (rule.applies)(self, position, len))
            .map(|rule| rule.tier)
            .unwrap_or(AlignmentTier::Intermediate)
    }

    /// Tier of the role at `position`, or `None` if the position is out of range.
    pub fn tier_at(&self, ranked: &RankedRoles, position: usize) -> Option<AlignmentTier> {
        (position < ranked.len()).then(|| self.classify(position, ranked.len()))
    }

    /// Tier of a role by id.
    pub fn tier_of(&self, ranked: &RankedRoles, id: &RoleId) -> Result<AlignmentTier, BreakdownError> {
        ranked
            .position_of(id)
            .map(|position| self.classify(position, ranked.len()))
            .ok_or_else(|| BreakdownError::SelectionNotFound {
                role_id: id.to_string(),
            })
    }

    /// Roles in `tier`, in rank order.
    pub fn roles_in_tier<'a>(&self, ranked: &'a RankedRoles, tier: AlignmentTier) -> Vec<&'a ScoredRole> {
        let len = ranked.len();
        ranked
            .iter()
            .enumerate()
            .filter(|(position, _)| self.classify(*position, len) == tier)
            .map(|(_, role)| role)
            .collect()
    }
}

impl Default for AlignmentRules {
    fn default() -> Self {
        Self::from(AlignmentConfig::default())
    }
}

impl From<AlignmentConfig> for AlignmentRules {
    fn from(config: AlignmentConfig) -> Self {
        Self::new(config.core_count, config.peripheral_count)
    }
}

impl From<&AlignmentConfig> for AlignmentRules {
    fn from(config: &AlignmentConfig) -> Self {
        Self::from(*config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_windows_on_ten_roles() {
        let rules = AlignmentRules::default();
        let tiers: Vec<_> = (0..10).map(|i| rules.classify(i, 10)).collect();
        assert_eq!(&tiers[..4], &[AlignmentTier::Core; 4]);
        assert_eq!(&tiers[4..7], &[AlignmentTier::Intermediate; 3]);
        assert_eq!(&tiers[7..], &[AlignmentTier::Peripheral; 3]);
    }

    #[test]
    fn overlapping_windows_prefer_core() {
        // n = 5 < 4 + 3: positions 2 and 3 sit in both windows.
        let rules = AlignmentRules::new(4, 3);
        assert_eq!(rules.classify(2, 5), AlignmentTier::Core);
        assert_eq!(rules.classify(3, 5), AlignmentTier::Core);
        assert_eq!(rules.classify(4, 5), AlignmentTier::Peripheral);
    }

    #[test]
    fn peripheral_window_larger_than_ranking() {
        let rules = AlignmentRules::new(1, 10);
        assert_eq!(rules.classify(0, 3), AlignmentTier::Core);
        assert_eq!(rules.classify(1, 3), AlignmentTier::Peripheral);
        assert_eq!(rules.classify(2, 3), AlignmentTier::Peripheral);
    }

    #[test]
    fn zero_windows_make_everything_intermediate() {
        let rules = AlignmentRules::new(0, 0);
        assert!((0..6).all(|i| rules.classify(i, 6) == AlignmentTier::Intermediate));
    }

    #[test]
    fn tier_at_out_of_range_is_none() {
        let rules = AlignmentRules::default();
        assert_eq!(rules.tier_at(&RankedRoles::default(), 0), None);
    }
}
