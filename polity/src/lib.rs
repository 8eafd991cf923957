//! Action-driven polity state engine.
//!
//! A [`core::polity::Polity`] owns an ordered plan of [`core::action::Action`]s
//! and changes only through its public mutators, either directly or by
//! replaying the plan with `execute_actions`.
//!
//! - **[`core`]**: Pure, deterministic logic. No I/O.
//! - **[`io`]**: Scenario file loading for the CLI.
//! - **[`render`]**: Text rendering of polity state.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
