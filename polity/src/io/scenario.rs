//! Scenario file parsing.
//!
//! Scenarios are TOML files describing a polity and its action plan.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::core::action::Action;
use crate::core::polity::Polity;

/// A parsed scenario: initial attributes plus the ordered plan.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub polity: PolitySection,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Initial attributes of the polity.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolitySection {
    pub name: String,
    pub voter_count: i64,
    pub party_count: i64,
    pub leader: String,
}

impl ScenarioFile {
    /// Load and validate a scenario file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read scenario {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load scenario {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let scenario: ScenarioFile = toml::from_str(contents).context("parse scenario")?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Counts are deliberately left unchecked; the polity accepts any value.
    fn validate(&self) -> Result<()> {
        if self.polity.name.trim().is_empty() {
            bail!("polity.name must be non-empty");
        }
        Ok(())
    }

    /// Build the polity, handing it ownership of the plan.
    pub fn into_polity(self) -> Polity {
        let PolitySection {
            name,
            voter_count,
            party_count,
            leader,
        } = self.polity;
        Polity::with_plan(name, voter_count, party_count, leader, self.actions)
    }
}
