//! Ordered tier rule table. The first rule whose predicate holds decides the
//! tier; positions matching no rule are intermediate.

use affinity_core::models::AlignmentTier;

use super::AlignmentRules;

/// One entry of the tier rule table.
pub struct TierRule {
    pub tier: AlignmentTier,
    /// `(rules, position, len) -> matches`
    pub applies: fn(&AlignmentRules, usize, usize) -> bool,
}

/// Core window first, then peripheral window.
pub const TIER_RULES: &[TierRule] = &[
    TierRule {
        tier: AlignmentTier::Core,
        applies: in_core_window,
    },
    TierRule {
        tier: AlignmentTier::Peripheral,
        applies: in_peripheral_window,
    },
];

fn in_core_window(rules: &AlignmentRules, position: usize, _len: usize) -> bool {
    position < rules.core_count
}

fn in_peripheral_window(rules: &AlignmentRules, position: usize, len: usize) -> bool {
    position >= len.saturating_sub(rules.peripheral_count)
}
