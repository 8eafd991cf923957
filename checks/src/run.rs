//! Check execution.
//!
//! Runs every selected check to completion. A failing or panicking check is
//! recorded and the run moves on.

use std::panic;

use anyhow::{Result, bail};
use tracing::{debug, instrument, warn};

use crate::outcome::CheckOutcome;
use crate::registry::{Check, CheckRegistry};

/// Run all checks whose id contains `filter` (all checks when `None`).
///
/// Errors when a filter is given and selects no checks.
#[instrument(skip_all, fields(check_count = registry.len()))]
pub fn run_checks(registry: &CheckRegistry, filter: Option<&str>) -> Result<Vec<CheckOutcome>> {
    let selected: Vec<&Check> = registry
        .iter()
        .filter(|check| filter.is_none_or(|needle| check.id().contains(needle)))
        .collect();
    if let Some(needle) = filter
        && selected.is_empty()
    {
        bail!("no checks match filter '{}'", needle);
    }
    Ok(selected.into_iter().map(run_check).collect())
}

fn run_check(check: &Check) -> CheckOutcome {
    let id = check.id();
    let outcome = match panic::catch_unwind(check.run) {
        Ok(Ok(())) => CheckOutcome::pass(id),
        Ok(Err(err)) => CheckOutcome::fail(id, format!("{err:#}")),
        Err(payload) => CheckOutcome::fail(id, panic_message(payload.as_ref())),
    };
    if outcome.passed {
        debug!(check = %outcome.id, "check passed");
    } else {
        warn!(check = %outcome.id, message = ?outcome.message, "check failed");
    }
    outcome
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("panicked: {text}")
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("panicked: {text}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass() -> Result<()> {
        Ok(())
    }

    fn fail() -> Result<()> {
        bail!("expected 1 == 2")
    }

    fn boom() -> Result<()> {
        panic!("boom")
    }

    fn registry() -> CheckRegistry {
        let mut registry = CheckRegistry::new();
        registry.register("Suite", "first", fail).expect("register");
        registry.register("Suite", "second", boom).expect("register");
        registry.register("Suite", "third", pass).expect("register");
        registry
    }

    /// A failure does not stop later checks from running.
    #[test]
    fn runs_every_check_despite_failures() {
        let outcomes = run_checks(&registry(), None).expect("run");
        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].passed);
        assert_eq!(outcomes[0].message.as_deref(), Some("expected 1 == 2"));
        assert!(!outcomes[1].passed);
        assert_eq!(outcomes[1].message.as_deref(), Some("panicked: boom"));
        assert!(outcomes[2].passed);
    }

    #[test]
    fn filter_selects_matching_ids() {
        let outcomes = run_checks(&registry(), Some("third")).expect("run");
        assert_eq!(outcomes, vec![CheckOutcome::pass("Suite.third".to_string())]);
    }

    #[test]
    fn filter_matching_nothing_is_an_error() {
        let err = run_checks(&registry(), Some("missing")).expect_err("empty selection");
        assert!(err.to_string().contains("missing"));
    }
}
