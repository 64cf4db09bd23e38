use affinity_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AffinityConfig::from_toml("").unwrap();

    assert_eq!(config.alignment.core_count, 4);
    assert_eq!(config.alignment.peripheral_count, 3);
    assert_eq!(config.catalog.path, "data/roles.json");
    assert_eq!(config.results.path, "data/results.json");
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[alignment]
core_count = 2

[observability]
json_logs = true
"#;
    let config = AffinityConfig::from_toml(toml).unwrap();
    assert_eq!(config.alignment.core_count, 2);
    // Non-overridden fields keep defaults
    assert_eq!(config.alignment.peripheral_count, 3);
    assert!(config.observability.json_logs);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = AffinityConfig::from_toml("[alignment\ncore_count = ").unwrap_err();
    assert!(matches!(
        err,
        affinity_core::AffinityError::ConfigError { .. }
    ));
}

#[test]
fn config_rejects_negative_counts() {
    let err = AffinityConfig::from_toml("[alignment]\ncore_count = -1").unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn config_serde_roundtrip() {
    let config = AffinityConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = AffinityConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.alignment, config.alignment);
    assert_eq!(roundtripped.catalog.path, config.catalog.path);
}

#[test]
fn config_from_missing_path_is_config_error() {
    let err = AffinityConfig::from_path("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("here.toml"));
}
