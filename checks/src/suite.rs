//! The democracy check suite.
//!
//! Each check builds a polity, drives it directly or through its action plan,
//! and asserts on the accessors.

use anyhow::{Result, ensure};
use polity::core::action::Action;
use polity::core::polity::Polity;

use crate::registry::CheckRegistry;

const SUITE: &str = "DemocracyTest";

/// Registry holding every democracy check in run order.
pub fn democracy() -> Result<CheckRegistry> {
    let mut registry = CheckRegistry::new();
    registry.register(SUITE, "VotersPerPartyCheck", voters_per_party_check)?;
    registry.register(SUITE, "LeaderChangeAction", leader_change_action)?;
    registry.register(
        SUITE,
        "PartyChangeAffectsVotersRatio",
        party_change_affects_voters_ratio,
    )?;
    registry.register(SUITE, "DirectVoterUpdate", direct_voter_update)?;
    registry.register(SUITE, "ZeroParties", zero_parties)?;
    registry.register(SUITE, "CountryNameCheck", country_name_check)?;
    registry.register(SUITE, "VotersPerPartyLargeValues", voters_per_party_large_values)?;
    registry.register(SUITE, "MultipleActionsTest", multiple_actions_test)?;
    registry.register(SUITE, "ZeroVotersCheck", zero_voters_check)?;
    registry.register(SUITE, "RepeatedActionIdempotent", repeated_action_idempotent)?;
    registry.register(SUITE, "LaterActionWins", later_action_wins)?;
    registry.register(SUITE, "EmptyPlanNoOp", empty_plan_no_op)?;
    registry.register(SUITE, "ZeroPartiesViaAction", zero_parties_via_action)?;
    Ok(registry)
}

fn voters_per_party_check() -> Result<()> {
    let polity = Polity::new("Freedonia", 5_000_000, 5, "John Doe");
    let ratio = polity.voters_per_party();
    ensure!(ratio == 1_000_000.0, "expected 1000000 voters per party, got {ratio}");
    Ok(())
}

fn leader_change_action() -> Result<()> {
    let mut polity = Polity::with_plan("Libertania", 2_000_000, 4, "Bob Brown", vec![
        Action::leader("Alice Smith"),
    ]);
    polity.execute_actions();
    ensure!(
        polity.leader() == "Alice Smith",
        "expected leader Alice Smith, got {}",
        polity.leader()
    );
    Ok(())
}

fn party_change_affects_voters_ratio() -> Result<()> {
    let mut polity = Polity::with_plan("MultiPartyLand", 1_000_000, 5, "Leader A", vec![
        Action::party_count(10),
    ]);
    let before = polity.voters_per_party();
    polity.execute_actions();
    let after = polity.voters_per_party();
    ensure!(after < before, "expected ratio to drop below {before}, got {after}");
    Ok(())
}

fn direct_voter_update() -> Result<()> {
    let mut polity = Polity::new("VoteNation", 1_000_000, 2, "Leader X");
    polity.set_voter_count(3_000_000);
    ensure!(
        polity.voter_count() == 3_000_000,
        "expected 3000000 voters, got {}",
        polity.voter_count()
    );
    Ok(())
}

fn zero_parties() -> Result<()> {
    let polity = Polity::new("NoPartyLand", 1_000_000, 0, "Leader Z");
    let ratio = polity.voters_per_party();
    ensure!(ratio == 0.0, "expected 0 voters per party, got {ratio}");
    Ok(())
}

fn country_name_check() -> Result<()> {
    let polity = Polity::new("Electoria", 1_500_000, 3, "Leader Y");
    ensure!(
        polity.name() == "Electoria",
        "expected name Electoria, got {}",
        polity.name()
    );
    Ok(())
}

fn voters_per_party_large_values() -> Result<()> {
    let polity = Polity::new("MegaDemocracy", 100_000_000, 100, "Big Leader");
    let ratio = polity.voters_per_party();
    ensure!((ratio - 1e8 / 100.0).abs() < 1e-6, "expected 1e6 voters per party, got {ratio}");
    Ok(())
}

fn multiple_actions_test() -> Result<()> {
    let mut polity = Polity::with_plan("Reformia", 1_000_000, 5, "Old Leader", vec![
        Action::voter_count(2_500_000),
        Action::party_count(8),
        Action::leader("Leader New"),
    ]);
    polity.execute_actions();
    ensure!(
        polity.voter_count() == 2_500_000,
        "expected 2500000 voters, got {}",
        polity.voter_count()
    );
    ensure!(
        polity.party_count() == 8,
        "expected 8 parties, got {}",
        polity.party_count()
    );
    ensure!(
        polity.leader() == "Leader New",
        "expected leader Leader New, got {}",
        polity.leader()
    );
    Ok(())
}

fn zero_voters_check() -> Result<()> {
    let polity = Polity::new("EmptyVotes", 0, 4, "NoVote Leader");
    let ratio = polity.voters_per_party();
    ensure!(ratio == 0.0, "expected 0 voters per party, got {ratio}");
    Ok(())
}

fn repeated_action_idempotent() -> Result<()> {
    let mut polity = Polity::with_plan("Echoland", 10, 2, "L", vec![
        Action::party_count(7),
        Action::party_count(7),
    ]);
    polity.execute_actions();
    ensure!(
        polity.party_count() == 7,
        "expected 7 parties, got {}",
        polity.party_count()
    );
    Ok(())
}

fn later_action_wins() -> Result<()> {
    let mut polity = Polity::with_plan("Flipflop", 1, 1, "L", vec![
        Action::voter_count(5),
        Action::voter_count(9),
    ]);
    polity.execute_actions();
    ensure!(
        polity.voter_count() == 9,
        "expected 9 voters, got {}",
        polity.voter_count()
    );
    Ok(())
}

fn empty_plan_no_op() -> Result<()> {
    let mut polity = Polity::new("Stasis", 1_000, 4, "Same Leader");
    let before = polity.clone();
    polity.execute_actions();
    ensure!(polity == before, "expected unchanged polity, got {polity:?}");
    Ok(())
}

fn zero_parties_via_action() -> Result<()> {
    let mut polity = Polity::with_plan("Dissolved", 1_000, 4, "L", vec![Action::party_count(0)]);
    polity.execute_actions();
    let ratio = polity.voters_per_party();
    ensure!(ratio == 0.0, "expected 0 voters per party, got {ratio}");
    Ok(())
}
