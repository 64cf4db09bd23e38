use affinity_core::errors::*;

#[test]
fn invalid_role_id_carries_raw_value() {
    let err = AffinityError::InvalidRoleId {
        raw: "bad id".into(),
    };
    assert!(err.to_string().contains("bad id"));
}

#[test]
fn results_not_found_carries_user() {
    let err = AffinityError::ResultsNotFound {
        user_id: "24601".into(),
    };
    assert!(err.to_string().contains("24601"));
}

#[test]
fn catalog_error_converts_into_affinity_error() {
    let err: AffinityError = CatalogError::DuplicateRole {
        role_id: "navigator".into(),
    }
    .into();
    assert!(matches!(err, AffinityError::Catalog(_)));
    assert!(err.to_string().contains("navigator"));
}

#[test]
fn selection_not_found_converts_into_affinity_error() {
    let err: AffinityError = BreakdownError::SelectionNotFound {
        role_id: "ghost".into(),
    }
    .into();
    assert!(matches!(
        err,
        AffinityError::Breakdown(BreakdownError::SelectionNotFound { .. })
    ));
    assert!(err.to_string().contains("ghost"));
}
