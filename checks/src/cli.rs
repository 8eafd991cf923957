//! CLI command implementations.

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::registry::CheckRegistry;
use crate::report::{line, summarize};
use crate::run::run_checks;

/// Exit code when the harness itself cannot run (bad filter, empty registry).
pub const INVALID: i32 = 1;
/// Exit code when `--deny-failures` is set and at least one check failed.
pub const FAILED: i32 = 2;

/// Process exit code for a finished run.
pub fn exit_code(failed: usize, deny_failures: bool) -> i32 {
    if deny_failures && failed > 0 {
        FAILED
    } else {
        0
    }
}

/// List all registered check ids in run order.
pub fn list_checks(registry: &CheckRegistry) -> Result<()> {
    if registry.is_empty() {
        bail!("no checks registered");
    }
    for check in registry.iter() {
        println!("{}", check.id());
    }
    Ok(())
}

/// Run checks and report each one. Returns the number of failures.
pub fn run_and_report(registry: &CheckRegistry, filter: Option<&str>, json: bool) -> Result<usize> {
    info!(filter, "running checks");
    let outcomes = run_checks(registry, filter)?;
    let summary = summarize(&outcomes);

    if json {
        let payload = serde_json::to_string_pretty(&outcomes).context("serialize outcomes")?;
        println!("{payload}");
        return Ok(summary.failed);
    }

    for outcome in &outcomes {
        if outcome.passed {
            println!("{}", line(outcome));
        } else {
            if let Some(message) = &outcome.message {
                eprintln!("error: {message}");
            }
            eprintln!("{}", line(outcome));
        }
    }
    println!(
        "summary: total={} passed={} failed={}",
        summary.total, summary.passed, summary.failed
    );
    Ok(summary.failed)
}
