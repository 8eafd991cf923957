//! Explicit registry of named checks.
//!
//! Checks are registered by ordinary function calls and kept in registration
//! order, which is also the order they run in.

use anyhow::{Result, bail};

/// A zero-argument check. `Ok(())` is a pass; `Err` carries the failure message.
pub type CheckFn = fn() -> Result<()>;

/// A registered check, identified as `<suite>.<name>`.
#[derive(Debug, Clone)]
pub struct Check {
    pub suite: &'static str,
    pub name: &'static str,
    pub run: CheckFn,
}

impl Check {
    pub fn id(&self) -> String {
        format!("{}.{}", self.suite, self.name)
    }
}

#[derive(Debug, Default)]
pub struct CheckRegistry {
    checks: Vec<Check>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `run` under `<suite>.<name>`. Errors on a duplicate id.
    pub fn register(&mut self, suite: &'static str, name: &'static str, run: CheckFn) -> Result<()> {
        if suite.trim().is_empty() || name.trim().is_empty() {
            bail!("check suite and name must be non-empty");
        }
        if self
            .checks
            .iter()
            .any(|check| check.suite == suite && check.name == name)
        {
            bail!("duplicate check {}.{}", suite, name);
        }
        self.checks.push(Check { suite, name, run });
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|check| check.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass() -> Result<()> {
        Ok(())
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = CheckRegistry::new();
        registry.register("Suite", "b", pass).expect("register b");
        registry.register("Suite", "a", pass).expect("register a");
        let ids: Vec<String> = registry.iter().map(Check::id).collect();
        assert_eq!(ids, vec!["Suite.b", "Suite.a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut registry = CheckRegistry::new();
        registry.register("Suite", "a", pass).expect("register");
        let err = registry.register("Suite", "a", pass).expect_err("duplicate");
        assert!(err.to_string().contains("Suite.a"));
    }

    #[test]
    fn get_finds_by_id() {
        let mut registry = CheckRegistry::new();
        registry.register("Suite", "a", pass).expect("register");
        assert!(registry.get("Suite.a").is_some());
        assert!(registry.get("Suite.b").is_none());
    }
}
