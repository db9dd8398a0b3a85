//! Test fixture loader for the nomenclature snapshot and unification scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Nomenclature lookup rows, in the service's JSON shape.
pub const NOMENCLATURE_SNAPSHOT: &str = "lookup/nomenclature_snapshot.json";

/// Multi-sample unification scenarios with their expected change records.
pub const UNIFICATION_SCENARIOS: &str = "scenarios/unification.json";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One expected change record of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedChange {
    pub action: String,
    pub symbol: String,
    #[serde(default)]
    pub new: Option<String>,
}

/// A named multi-sample input with the change records each sample must get.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub samples: BTreeMap<String, Vec<String>>,
    pub expected: BTreeMap<String, Vec<ExpectedChange>>,
    /// Expected sample membership of named graph nodes after resolution.
    #[serde(default)]
    pub expected_membership: BTreeMap<String, Vec<String>>,
    /// Run with the approved aggregation stage enabled.
    #[serde(default)]
    pub aggregate_approved: bool,
}

/// Load every unification scenario.
pub fn load_scenarios() -> Vec<Scenario> {
    load_fixture(UNIFICATION_SCENARIOS)
}

/// Load one scenario by name.
///
/// # Panics
/// Panics if no scenario has that name.
pub fn scenario(name: &str) -> Scenario {
    load_scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("Unknown scenario {name}"))
}
