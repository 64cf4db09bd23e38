//! Test fixture loader for the affinity golden scenarios and sample data.
//!
//! Provides typed deserialization of the fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root directory of the test-fixtures folder, found by walking up from the
/// calling crate's manifest directory.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir)
        .ancestors()
        .map(|dir| dir.join("test-fixtures"))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures directory above {manifest_dir}"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a fixture file as raw text.
///
/// # Panics
/// Panics if the file can't be read.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file can't be read or doesn't match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    serde_json::from_str(&load_fixture_text(relative_path))
        .unwrap_or_else(|e| panic!("cannot parse fixture {relative_path}: {e}"))
}

/// JSON files directly inside a fixture subdirectory, sorted by name.
/// A missing subdirectory yields no files.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixture_path(subdir)) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

/// Path of the sample role catalog.
pub const SAMPLE_CATALOG: &str = "catalog/roles.json";

/// Path of the sample results document.
pub const SAMPLE_RESULTS: &str = "results/users.json";

/// A golden breakdown scenario.
///
/// `catalog` lists role ids in catalog order; tests build the role records
/// from the ids so that every narrative text names its role and variant.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub core_count: usize,
    pub peripheral_count: usize,
    pub catalog: Vec<String>,
    pub results: BTreeMap<String, f64>,
    pub expected: GoldenExpectation,
}

/// Expected output of a golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    /// Role ids, highest rank first.
    pub ranking: Vec<String>,
    /// Role id to tier name.
    pub tiers: BTreeMap<String, String>,
    /// Role id to narrative variant name.
    pub narratives: BTreeMap<String, String>,
}

/// Load every golden scenario, paired with its file name.
pub fn load_golden_scenarios() -> Vec<(String, GoldenScenario)> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_fixture(&format!("golden/{name}"));
            (name, scenario)
        })
        .collect()
}
