//! Plain-text rendering of polity state.
//!
//! Rendering only reads accessors; it never changes the polity.

use std::fmt::Write as _;

use crate::core::polity::Polity;

/// Four-line summary of the polity's current attributes.
pub fn display(polity: &Polity) -> String {
    format!(
        "Country: {}\nVoter Count: {}\nParty Count: {}\nCurrent Leader: {}\n",
        polity.name(),
        polity.voter_count(),
        polity.party_count(),
        polity.leader()
    )
}

/// One numbered line per planned action, in execution order.
pub fn plan(polity: &Polity) -> String {
    let mut out = String::new();
    for (index, action) in polity.actions().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, action.describe());
    }
    out
}
