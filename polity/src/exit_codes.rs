//! Stable exit codes for polity CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Scenario could not be read or parsed.
pub const INVALID: i32 = 1;
