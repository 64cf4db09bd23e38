//! Narrative selection: which of a role's five texts to show.
//!
//! Precedence, first match wins:
//!
//! | rule | condition | text |
//! |---|---|---|
//! | 1 | score equals the highest score | `top_rank_desc` |
//! | 2 | score equals the lowest score | `bottom_rank_desc` |
//! | 3 | tier is core | `high_rank_desc` |
//! | 4 | tier is peripheral | `low_rank_desc` |
//! | 5 | otherwise | `role_desc` |

use affinity_core::errors::BreakdownError;
use affinity_core::models::{AlignmentTier, NarrativeVariant, ScoredRole};

use crate::alignment::AlignmentRules;
use crate::rank::RankedRoles;

/// Facts about a ranked role that the narrative rules inspect.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeFacts {
    pub score: f64,
    pub highest: f64,
    pub lowest: f64,
    pub tier: AlignmentTier,
}

struct NarrativeRule {
    variant: NarrativeVariant,
    applies: fn(&NarrativeFacts) -> bool,
}

const NARRATIVE_RULES: &[NarrativeRule] = &[
    NarrativeRule {
        variant: NarrativeVariant::TopRank,
        applies: tied_highest,
    },
    NarrativeRule {
        variant: NarrativeVariant::BottomRank,
        applies: tied_lowest,
    },
    NarrativeRule {
        variant: NarrativeVariant::Core,
        applies: in_core_tier,
    },
    NarrativeRule {
        variant: NarrativeVariant::Peripheral,
        applies: in_peripheral_tier,
    },
];

fn tied_highest(facts: &NarrativeFacts) -> bool {
    facts.score == facts.highest
}

fn tied_lowest(facts: &NarrativeFacts) -> bool {
    facts.score == facts.lowest
}

fn in_core_tier(facts: &NarrativeFacts) -> bool {
    facts.tier == AlignmentTier::Core
}

fn in_peripheral_tier(facts: &NarrativeFacts) -> bool {
    facts.tier == AlignmentTier::Peripheral
}

/// Apply the precedence table to a set of facts.
pub fn variant_for(facts: &NarrativeFacts) -> NarrativeVariant {
    NARRATIVE_RULES
        .iter()
        .find(|rule| (rule.applies)(facts))
        .map(|rule| rule.variant)
        .unwrap_or(NarrativeVariant::Default)
}

/// The text a role carries for `variant`.
pub fn variant_text(role: &ScoredRole, variant: NarrativeVariant) -> &str {
    let role = &role.role;
    match variant {
        NarrativeVariant::TopRank => &role.top_rank_desc,
        NarrativeVariant::BottomRank => &role.bottom_rank_desc,
        NarrativeVariant::Core => &role.high_rank_desc,
        NarrativeVariant::Peripheral => &role.low_rank_desc,
        NarrativeVariant::Default => &role.role_desc,
    }
}

/// Pick the narrative variant for `role` within `ranked`.
///
/// Fails with `SelectionNotFound` if the role is not part of the ranking.
pub fn select_variant(
    role: &ScoredRole,
    ranked: &RankedRoles,
    rules: &AlignmentRules,
) -> Result<NarrativeVariant, BreakdownError> {
    let tier = rules.tier_of(ranked, role.id())?;
    // A role in the ranking implies the ranking is non-empty.
    let (Some(highest), Some(lowest)) = (ranked.highest_score(), ranked.lowest_score()) else {
        return Err(BreakdownError::SelectionNotFound {
            role_id: role.id().to_string(),
        });
    };
    Ok(variant_for(&NarrativeFacts {
        score: role.score,
        highest,
        lowest,
        tier,
    }))
}

/// The narrative text for `role` within `ranked`, returned verbatim.
pub fn describe<'a>(
    role: &'a ScoredRole,
    ranked: &RankedRoles,
    rules: &AlignmentRules,
) -> Result<&'a str, BreakdownError> {
    let variant = select_variant(role, ranked, rules)?;
    Ok(variant_text(role, variant))
}
