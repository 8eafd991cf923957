//! Discrete, replayable changes applied to a [`Polity`].
//!
//! Actions carry their own payload and target. They never hold on to the
//! polity they change: the polity is handed to [`Action::apply`] for the
//! duration of the call and every write goes through its public mutators.

use serde::{Deserialize, Serialize};

use crate::core::polity::Polity;

/// Numeric attribute targeted by [`Action::ScalarChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    VoterCount,
    PartyCount,
}

/// A single unit of change in a polity's action plan.
///
/// Scenario files use the internally tagged form:
///
/// ```toml
/// [[actions]]
/// type = "voter_count"
/// value = 2500000
///
/// [[actions]]
/// type = "leader"
/// leader = "Leader New"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ActionRecord", into = "ActionRecord")]
pub enum Action {
    /// Overwrite one numeric attribute with `value`.
    ScalarChange { field: ScalarField, value: i64 },
    /// Overwrite the current leader.
    LeaderChange { leader: String },
}

/// On-disk shape of an [`Action`]: one tag per target attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
enum ActionRecord {
    VoterCount { value: i64 },
    PartyCount { value: i64 },
    Leader { leader: String },
}

impl From<ActionRecord> for Action {
    fn from(record: ActionRecord) -> Self {
        match record {
            ActionRecord::VoterCount { value } => Self::voter_count(value),
            ActionRecord::PartyCount { value } => Self::party_count(value),
            ActionRecord::Leader { leader } => Self::LeaderChange { leader },
        }
    }
}

impl From<Action> for ActionRecord {
    fn from(action: Action) -> Self {
        match action {
            Action::ScalarChange {
                field: ScalarField::VoterCount,
                value,
            } => Self::VoterCount { value },
            Action::ScalarChange {
                field: ScalarField::PartyCount,
                value,
            } => Self::PartyCount { value },
            Action::LeaderChange { leader } => Self::Leader { leader },
        }
    }
}

impl Action {
    pub fn voter_count(value: i64) -> Self {
        Self::ScalarChange {
            field: ScalarField::VoterCount,
            value,
        }
    }

    pub fn party_count(value: i64) -> Self {
        Self::ScalarChange {
            field: ScalarField::PartyCount,
            value,
        }
    }

    pub fn leader(leader: impl Into<String>) -> Self {
        Self::LeaderChange {
            leader: leader.into(),
        }
    }

    /// Apply this change to `polity`. Never fails: every variant is a plain
    /// overwrite of exactly one attribute.
    pub fn apply(&self, polity: &mut Polity) {
        match self {
            Self::ScalarChange {
                field: ScalarField::VoterCount,
                value,
            } => polity.set_voter_count(*value),
            Self::ScalarChange {
                field: ScalarField::PartyCount,
                value,
            } => polity.set_party_count(*value),
            Self::LeaderChange { leader } => polity.set_leader(leader.clone()),
        }
    }

    /// Short label for introspection and logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::ScalarChange {
                field: ScalarField::VoterCount,
                ..
            } => "Change voter count",
            Self::ScalarChange {
                field: ScalarField::PartyCount,
                ..
            } => "Change party count",
            Self::LeaderChange { .. } => "Change leader",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::polity;

    #[test]
    fn scalar_change_overwrites_target_only() {
        let mut target = polity("Freedonia", 100, 4, "A");
        Action::party_count(7).apply(&mut target);
        assert_eq!(target.party_count(), 7);
        assert_eq!(target.voter_count(), 100);
        assert_eq!(target.leader(), "A");
    }

    #[test]
    fn leader_change_overwrites_leader() {
        let mut target = polity("Freedonia", 100, 4, "A");
        Action::leader("B").apply(&mut target);
        assert_eq!(target.leader(), "B");
    }

    /// Repeating the same change does not accumulate.
    #[test]
    fn identical_scalar_change_is_idempotent() {
        let mut target = polity("Freedonia", 100, 4, "A");
        let action = Action::voter_count(42);
        action.apply(&mut target);
        action.apply(&mut target);
        assert_eq!(target.voter_count(), 42);
    }

    #[test]
    fn describe_labels_each_target() {
        assert_eq!(Action::voter_count(1).describe(), "Change voter count");
        assert_eq!(Action::party_count(1).describe(), "Change party count");
        assert_eq!(Action::leader("x").describe(), "Change leader");
    }

    #[test]
    fn serializes_with_per_target_tag() {
        let json = serde_json::to_value(Action::party_count(8)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "type": "party_count", "value": 8 }));

        let parsed: Action =
            serde_json::from_str(r#"{ "type": "leader", "leader": "Alice Smith" }"#)
                .expect("parse");
        assert_eq!(parsed, Action::leader("Alice Smith"));
    }

    #[test]
    fn rejects_fields_from_another_target() {
        let err = serde_json::from_str::<Action>(
            r#"{ "type": "voter_count", "value": 5, "leader": "Someone" }"#,
        )
        .expect_err("stray field");
        assert!(err.to_string().contains("leader"));
    }
}
