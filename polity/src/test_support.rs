//! Test-only helpers for constructing polities and scenario files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::action::Action;
use crate::core::polity::Polity;

/// Create a polity with an empty plan.
pub fn polity(name: &str, voters: i64, parties: i64, leader: &str) -> Polity {
    Polity::new(name, voters, parties, leader)
}

/// Create a polity owning `plan`.
pub fn polity_with_plan(
    name: &str,
    voters: i64,
    parties: i64,
    leader: &str,
    plan: Vec<Action>,
) -> Polity {
    Polity::with_plan(name, voters, parties, leader, plan)
}

/// The three-step reform scenario used across tests, as TOML.
pub const REFORMIA_TOML: &str = r#"
[polity]
name = "Reformia"
voter_count = 1000000
party_count = 5
leader = "Old Leader"

[[actions]]
type = "voter_count"
value = 2500000

[[actions]]
type = "party_count"
value = 8

[[actions]]
type = "leader"
leader = "Leader New"
"#;

/// Temporary directory holding scenario files.
pub struct ScenarioDir {
    dir: tempfile::TempDir,
}

impl ScenarioDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `<dir>/<file_name>` and return the full path.
    pub fn write(&self, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
