//! The polity record and its owned action plan.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::core::action::Action;

/// A named polity whose state changes through an ordered action plan.
///
/// Construction performs no validation: negative or otherwise nonsensical
/// counts are stored as given. The only guarded operation is
/// [`Polity::voters_per_party`], which reports `0.0` when there are no parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polity {
    name: String,
    voter_count: i64,
    party_count: i64,
    leader: String,
    actions: Vec<Action>,
}

/// Point-in-time view of a polity's attributes and derived ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolitySnapshot {
    pub name: String,
    pub voter_count: i64,
    pub party_count: i64,
    pub leader: String,
    pub voters_per_party: f64,
}

impl Polity {
    /// Create a polity with an empty action plan.
    pub fn new(
        name: impl Into<String>,
        voter_count: i64,
        party_count: i64,
        leader: impl Into<String>,
    ) -> Self {
        Self::with_plan(name, voter_count, party_count, leader, Vec::new())
    }

    /// Create a polity that takes ownership of `plan`.
    ///
    /// The plan is fixed for the polity's lifetime; it is replayed in order by
    /// [`Polity::execute_actions`].
    pub fn with_plan(
        name: impl Into<String>,
        voter_count: i64,
        party_count: i64,
        leader: impl Into<String>,
        plan: Vec<Action>,
    ) -> Self {
        Self {
            name: name.into(),
            voter_count,
            party_count,
            leader: leader.into(),
            actions: plan,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn voter_count(&self) -> i64 {
        self.voter_count
    }

    pub fn party_count(&self) -> i64 {
        self.party_count
    }

    pub fn leader(&self) -> &str {
        &self.leader
    }

    /// The owned plan in insertion order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn set_voter_count(&mut self, voter_count: i64) {
        self.voter_count = voter_count;
    }

    pub fn set_party_count(&mut self, party_count: i64) {
        self.party_count = party_count;
    }

    pub fn set_leader(&mut self, leader: impl Into<String>) {
        self.leader = leader.into();
    }

    /// Voters per party in floating point; `0.0` when `party_count == 0`.
    pub fn voters_per_party(&self) -> f64 {
        if self.party_count == 0 {
            return 0.0;
        }
        self.voter_count as f64 / self.party_count as f64
    }

    /// Apply every owned action to `self` in insertion order.
    ///
    /// Later actions overwrite earlier ones that target the same attribute.
    /// An empty plan is a no-op. The plan itself is left intact, so calling
    /// this again replays it.
    pub fn execute_actions(&mut self) {
        let span = debug_span!("execute_actions", polity = %self.name, plan_len = self.actions.len());
        let _enter = span.enter();

        // Detach the plan so each action can borrow `self` mutably.
        let plan = std::mem::take(&mut self.actions);
        for (index, action) in plan.iter().enumerate() {
            action.apply(self);
            debug!(index, action = action.describe(), "applied action");
        }
        self.actions = plan;
    }

    pub fn snapshot(&self) -> PolitySnapshot {
        PolitySnapshot {
            name: self.name.clone(),
            voter_count: self.voter_count,
            party_count: self.party_count,
            leader: self.leader.clone(),
            voters_per_party: self.voters_per_party(),
        }
    }
}
