use affinity_core::models::*;
use affinity_core::AffinityError;

fn role(id: &str) -> Role {
    Role {
        id: RoleId::parse(id).unwrap(),
        name: id.to_uppercase(),
        role_desc: format!("{id} default"),
        core_drive: format!("{id} drive"),
        most_like_when: format!("{id} when"),
        high_rank_desc: format!("{id} high"),
        low_rank_desc: format!("{id} low"),
        top_rank_desc: format!("{id} top"),
        bottom_rank_desc: format!("{id} bottom"),
    }
}

#[test]
fn role_id_accepts_identifier_characters() {
    for raw in ["navigator", "role-1", "ROLE_2", "a"] {
        assert!(RoleId::parse(raw).is_ok(), "{raw} should parse");
    }
}

#[test]
fn role_id_rejects_malformed_input() {
    let long = "x".repeat(65);
    for raw in ["", "has space", "slash/id", long.as_str()] {
        assert!(
            matches!(RoleId::parse(raw), Err(AffinityError::InvalidRoleId { .. })),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn role_id_deserialization_validates() {
    assert!(serde_json::from_str::<RoleId>("\"ok\"").is_ok());
    assert!(serde_json::from_str::<RoleId>("\"not ok\"").is_err());
}

#[test]
fn user_id_rejects_path_like_input() {
    assert!(UserId::parse("24601").is_ok());
    assert!(matches!(
        UserId::parse("../24601"),
        Err(AffinityError::InvalidUserId { .. })
    ));
}

#[test]
fn result_set_deserializes_from_plain_object() {
    let results: ResultSet = serde_json::from_str(r#"{"a": 90, "b": 12.5, "zzz": 3}"#).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results.score_for("a"), Some(90.0));
    assert_eq!(results.score_for("b"), Some(12.5));
    assert_eq!(results.score_for("missing"), None);
}

#[test]
fn result_set_collects_from_pairs() {
    let results: ResultSet = [("a", 1.0), ("b", 2.0)].into_iter().collect();
    assert_eq!(results.iter().count(), 2);
    assert!(!results.is_empty());
}

#[test]
fn scored_role_serializes_flat() {
    let scored = ScoredRole::new(role("a"), 42.0);
    let value = serde_json::to_value(&scored).unwrap();
    assert_eq!(value["id"], "a");
    assert_eq!(value["score"], 42.0);
    assert_eq!(value["top_rank_desc"], "a top");
    assert_eq!(scored.id().as_str(), "a");
}

#[test]
fn alignment_tier_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&AlignmentTier::Peripheral).unwrap(),
        "\"peripheral\""
    );
    assert_eq!(
        "intermediate".parse::<AlignmentTier>().unwrap(),
        AlignmentTier::Intermediate
    );
    assert!("middle".parse::<AlignmentTier>().is_err());
}

#[test]
fn alignment_labels_match_tiers() {
    assert_eq!(AlignmentTier::Core.alignment_label(), "High");
    assert_eq!(AlignmentTier::Intermediate.alignment_label(), "Intermediate");
    assert_eq!(AlignmentTier::Peripheral.alignment_label(), "Low");
    assert_eq!(AlignmentTier::ALL.len(), 3);
}

#[test]
fn result_set_drops_non_numeric_scores() {
    let results: ResultSet =
        serde_json::from_str(r#"{"a": 4, "b": null, "c": "x", "d": {"nested": 1}, "e": -2.5}"#)
            .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results.score_for("a"), Some(4.0));
    assert_eq!(results.score_for("b"), None);
    assert_eq!(results.score_for("c"), None);
    assert_eq!(results.score_for("e"), Some(-2.5));
}
