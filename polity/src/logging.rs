//! Diagnostic tracing shared by the workspace binaries.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Stdout is reserved
//! for command output (rendered polities, check results), so piping
//! `polity show --json` or `checks run --json` stays machine-readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from a raw `RUST_LOG` value, falling back to
/// [`DEFAULT_FILTER`] when it is missing or invalid.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber.
///
/// A second call is a no-op, so tests and binaries can both call it.
///
/// # Example
/// ```bash
/// RUST_LOG=polity=debug polity show scenarios/reformia.toml --execute
/// ```
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        assert_eq!(filter_from(None).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn uses_valid_directives() {
        assert_eq!(filter_from(Some("polity=debug")).to_string(), "polity=debug");
    }

    #[test]
    fn falls_back_to_default_when_invalid() {
        assert_eq!(filter_from(Some("polity=notalevel")).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
