use std::collections::HashMap;

use affinity_core::models::{AlignmentTier, NarrativeVariant, ResultSet, Role, RoleId};
use affinity_ranking::{compute_breakdown, join, rank, AlignmentRules};
use proptest::prelude::*;

fn make_catalog(n: usize) -> Vec<Role> {
    (0..n)
        .map(|i| Role {
            id: RoleId::parse(&format!("r{i}")).unwrap(),
            name: format!("Role {i}"),
            role_desc: format!("r{i}:default"),
            core_drive: String::new(),
            most_like_when: String::new(),
            high_rank_desc: format!("r{i}:core"),
            low_rank_desc: format!("r{i}:peripheral"),
            top_rank_desc: format!("r{i}:top"),
            bottom_rank_desc: format!("r{i}:bottom"),
        })
        .collect()
}

/// Catalog plus sparse results with a small score range to force ties,
/// and a few keys that name no role.
fn arb_inputs() -> impl Strategy<Value = (Vec<Role>, ResultSet)> {
    (0usize..16).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(prop::option::of(0u8..6), n),
            prop::collection::vec(("[a-z]{3,6}", 0u8..100), 0..4),
        )
            .prop_map(|(n, scores, unknown)| {
                let catalog = make_catalog(n);
                let mut results = ResultSet::new();
                for (i, score) in scores.into_iter().enumerate() {
                    if let Some(s) = score {
                        results.insert(format!("r{i}"), f64::from(s));
                    }
                }
                for (key, s) in unknown {
                    results.insert(key, f64::from(s));
                }
                (catalog, results)
            })
    })
}

proptest! {
    #[test]
    fn ranking_is_deterministic((catalog, results) in arb_inputs()) {
        let first = rank(&join(&catalog, &results));
        let second = rank(&join(&catalog, &results));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_catalog_role_is_ranked_once((catalog, results) in arb_inputs()) {
        let ranked = rank(&join(&catalog, &results));
        prop_assert_eq!(ranked.len(), catalog.len());
        let mut ids: Vec<&str> = ranked.ids().map(|i| i.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn ranking_is_descending_and_stable_under_ties((catalog, results) in arb_inputs()) {
        let catalog_pos: HashMap<&str, usize> = catalog
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.as_str(), i))
            .collect();
        let ranked = rank(&join(&catalog, &results));
        for pair in ranked.as_slice().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(
                    catalog_pos[pair[0].id().as_str()] < catalog_pos[pair[1].id().as_str()]
                );
            }
        }
    }

    #[test]
    fn tiers_partition_positions(
        n in 0usize..40,
        core_count in 0usize..12,
        peripheral_count in 0usize..12,
    ) {
        let rules = AlignmentRules::new(core_count, peripheral_count);
        let tiers: Vec<AlignmentTier> = (0..n).map(|i| rules.classify(i, n)).collect();
        let core = tiers.iter().filter(|t| **t == AlignmentTier::Core).count();
        prop_assert_eq!(core, core_count.min(n));

        let peripheral = tiers.iter().filter(|t| **t == AlignmentTier::Peripheral).count();
        prop_assert_eq!(peripheral, peripheral_count.min(n.saturating_sub(core_count)));
        for (i, tier) in tiers.iter().enumerate() {
            if i < core_count {
                prop_assert_eq!(*tier, AlignmentTier::Core);
            }
        }
    }

    #[test]
    fn tied_highest_always_gets_top_narrative((catalog, results) in arb_inputs()) {
        let breakdown = compute_breakdown(&catalog, &results, AlignmentRules::default());
        if let Some(highest) = breakdown.highest_score() {
            for entry in breakdown.entries() {
                if entry.role.score == highest {
                    prop_assert_eq!(entry.variant, NarrativeVariant::TopRank);
                    prop_assert_eq!(entry.narrative, entry.role.role.top_rank_desc.as_str());
                } else {
                    prop_assert_ne!(entry.variant, NarrativeVariant::TopRank);
                }
            }
        }
    }

    #[test]
    fn tied_lowest_gets_bottom_narrative_unless_also_highest(
        (catalog, results) in arb_inputs()
    ) {
        let breakdown = compute_breakdown(&catalog, &results, AlignmentRules::default());
        if let (Some(highest), Some(lowest)) = (breakdown.highest_score(), breakdown.lowest_score()) {
            for entry in breakdown.entries() {
                if entry.role.score == lowest && lowest != highest {
                    prop_assert_eq!(entry.variant, NarrativeVariant::BottomRank);
                }
                prop_assert!((0.0..=100.0).contains(&entry.scale_position));
            }
        }
    }
}
