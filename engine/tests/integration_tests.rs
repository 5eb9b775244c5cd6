//! Integration tests driving the engine through its public operations:
//! actor creation → poll opening → registration → voting → finalization.
//!
//! Only the silent operations are used where the engine is expected to
//! ignore a request, and state is inspected afterwards to confirm nothing
//! changed.

use factcheck_engine::{EngineConfig, FactCheckSystem, PollConfigIssue, Rejection};
use factcheck_types::{ActorId, Category, PollId, PollStatus, PollTerms, ZeroWeightPolicy};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

fn actor(name: &str) -> ActorId {
    ActorId::new(name)
}

fn terms(max_votes: u32, max_reward: f64) -> PollTerms {
    PollTerms {
        max_votes,
        minimum_trust: 0.0,
        registration_fee: 0.0,
        participation_reward: 0.0,
        max_reward,
    }
}

/// Requester "req" with a deep balance plus the given voters at balance 2
/// (confidence 100 at the default trust of 50).
fn system_with(voters: &[&str]) -> FactCheckSystem {
    let mut system = FactCheckSystem::default();
    system.create_actor("req", 1_000_000.0);
    for voter in voters {
        system.create_actor(*voter, 2.0);
    }
    system
}

/// Open `poll` on behalf of "req".
fn open(system: &mut FactCheckSystem, category: Category, poll: &PollId, terms: PollTerms) {
    system.open_poll(&actor("req"), category, poll.clone(), terms);
}

fn register_all(system: &mut FactCheckSystem, poll: &PollId, voters: &[&str]) {
    for voter in voters {
        system.register(&actor(voter), poll);
    }
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[test]
fn unanimous_real_poll_pays_evenly_and_raises_trust() {
    let voters = ["a", "b", "c"];
    let mut system = system_with(&voters);
    let poll = PollId::new("moon-landing");
    open(&mut system, Category::Science, &poll, terms(3, 90.0));
    register_all(&mut system, &poll, &voters);

    for voter in voters {
        system.vote(&actor(voter), &poll, 10);
    }

    let p = system.poll(&poll).expect("poll stored");
    assert!(p.is_finished());
    assert_eq!(p.status(), PollStatus::Real);
    assert_close(p.score(), 10.0);

    for voter in voters {
        assert_close(system.balance(&actor(voter)).unwrap(), 2.0 + 30.0);
        assert_eq!(system.trust(&actor(voter), Category::Science), Some(55.0));
        // Other categories are untouched.
        assert_eq!(system.trust(&actor(voter), Category::Sports), Some(50.0));
    }
    assert_close(system.balance(&actor("req")).unwrap(), 1_000_000.0 - 90.0);
}

#[test]
fn dissenters_lose_trust_and_earn_nothing() {
    let voters = ["a", "b", "c"];
    let mut system = system_with(&voters);
    let poll = PollId::new("claim");
    open(&mut system, Category::Health, &poll, terms(3, 60.0));
    register_all(&mut system, &poll, &voters);

    system.vote(&actor("a"), &poll, 0);
    system.vote(&actor("b"), &poll, 0);
    system.vote(&actor("c"), &poll, 10);

    let p = system.poll(&poll).unwrap();
    assert_eq!(p.status(), PollStatus::Fake);
    // (0·100 + 0·100 + 10·100) / 300
    assert_close(p.score(), 10.0 / 3.0);

    let settlement = p.settlement().expect("finished poll has a settlement");
    assert_close(settlement.payout(&actor("a")).unwrap().reward, 30.0);
    assert_close(settlement.payout(&actor("b")).unwrap().reward, 30.0);
    assert_close(settlement.payout(&actor("c")).unwrap().reward, 0.0);

    assert_eq!(system.trust(&actor("a"), Category::Health), Some(55.0));
    assert_eq!(system.trust(&actor("c"), Category::Health), Some(45.0));
    assert_close(system.balance(&actor("c")).unwrap(), 2.0);
}

#[test]
fn fees_and_participation_flow_through_the_requester() {
    let mut system = system_with(&["a", "b"]);
    let poll = PollId::new("claim");
    let t = PollTerms {
        registration_fee: 1.0,
        participation_reward: 0.5,
        ..terms(2, 10.0)
    };
    open(&mut system, Category::Economics, &poll, t);
    register_all(&mut system, &poll, &["a", "b"]);
    assert_close(system.balance(&actor("a")).unwrap(), 1.0);

    system.vote(&actor("a"), &poll, 10);
    system.vote(&actor("b"), &poll, 9);

    // Both voted on the real side; a (credit 1.0) outweighs b (credit 0.8).
    // Confidences were 1.0 × 50 each.
    let settlement = system.poll(&poll).unwrap().settlement().unwrap().clone();
    assert_close(settlement.total_factor, 50.0 + 40.0);
    let a = settlement.payout(&actor("a")).unwrap();
    let b = settlement.payout(&actor("b")).unwrap();
    assert_close(a.reward, 10.0 * 50.0 / 90.0);
    assert_close(b.reward, 10.0 * 40.0 / 90.0);
    assert_close(
        system.balance(&actor("a")).unwrap(),
        1.0 + 0.5 + 10.0 * 50.0 / 90.0,
    );

    let summary = system.ledger_summary();
    assert_close(summary.total_balance, 1_000_000.0 + 4.0);
    assert_eq!(summary.negative_balances, 0);
}

#[test]
fn pending_deltas_track_the_latest_status() {
    let mut system = system_with(&["a", "b", "c"]);
    let poll = PollId::new("claim");
    open(&mut system, Category::Politics, &poll, terms(3, 10.0));
    register_all(&mut system, &poll, &["a", "b", "c"]);

    system.vote(&actor("a"), &poll, 10);
    let p = system.poll(&poll).unwrap();
    assert_eq!(p.pending_delta(&actor("a")), Some(5.0));

    // Two fake votes flip the verdict; a's delta is recomputed, not summed.
    system.vote(&actor("b"), &poll, 0);
    system.vote(&actor("c"), &poll, 0);
    let p = system.poll(&poll).unwrap();
    assert_eq!(p.status(), PollStatus::Fake);
    assert_eq!(p.pending_delta(&actor("a")), Some(-5.0));
    assert_eq!(system.trust(&actor("a"), Category::Politics), Some(45.0));
}

// ---------------------------------------------------------------------------
// Poll opening
// ---------------------------------------------------------------------------

#[test]
fn affordability_boundary() {
    let mut system = FactCheckSystem::default();
    system.create_actor("exact", 4_550.0);
    system.create_actor("short", 4_549.0);

    system.open_default_poll(&actor("exact"), Category::Science, "ok");
    system.open_default_poll(&actor("short"), Category::Science, "nope");

    assert!(system.poll(&PollId::new("ok")).unwrap().is_valid());
    assert!(system.poll(&PollId::new("nope")).is_none());
}

#[test]
fn non_finite_terms_are_rejected() {
    let mut system = system_with(&[]);
    let t = PollTerms {
        max_reward: f64::NAN,
        ..terms(2, 0.0)
    };
    let result = system.try_open_poll(&actor("req"), Category::Science, "p", t);
    assert!(matches!(
        result,
        Err(Rejection::InvalidPollConfiguration(PollConfigIssue::Terms(_)))
    ));
    assert!(system.poll(&PollId::new("p")).is_none());
}

// ---------------------------------------------------------------------------
// Ignored requests
// ---------------------------------------------------------------------------

#[test]
fn double_vote_is_ignored() {
    let mut system = system_with(&["a", "b"]);
    let poll = PollId::new("claim");
    open(&mut system, Category::Sports, &poll, terms(2, 10.0));
    register_all(&mut system, &poll, &["a", "b"]);

    system.vote(&actor("a"), &poll, 10);
    let before = system.poll(&poll).unwrap().clone();
    system.vote(&actor("a"), &poll, 0);
    let after = system.poll(&poll).unwrap();

    assert_eq!(after.votes(), before.votes());
    assert_eq!(after.confidences(), before.confidences());
    assert_eq!(after.score(), before.score());
    assert!(!after.is_finished());
}

#[test]
fn double_registration_charges_once() {
    let mut system = system_with(&["a"]);
    let poll = PollId::new("claim");
    let t = PollTerms {
        registration_fee: 0.75,
        ..terms(2, 10.0)
    };
    open(&mut system, Category::Sports, &poll, t);

    system.register(&actor("a"), &poll);
    system.register(&actor("a"), &poll);

    assert_close(system.balance(&actor("a")).unwrap(), 1.25);
    assert_eq!(system.poll(&poll).unwrap().registered().len(), 1);
}

#[test]
fn requester_may_register_and_vote_on_own_poll() {
    let mut system = system_with(&["a"]);
    let poll = PollId::new("claim");
    let t = PollTerms {
        registration_fee: 3.0,
        ..terms(2, 10.0)
    };
    open(&mut system, Category::Science, &poll, t);

    system.register(&actor("req"), &poll);
    assert_close(system.balance(&actor("req")).unwrap(), 1_000_000.0);

    let receipt = system.try_vote(&actor("req"), &poll, 10).unwrap();
    assert_close(receipt.confidence, 1_000_000.0 * 50.0);
}

#[test]
fn finished_poll_rejects_late_actors() {
    let mut system = system_with(&["a", "b"]);
    let poll = PollId::new("claim");
    open(&mut system, Category::Science, &poll, terms(1, 10.0));
    register_all(&mut system, &poll, &["a", "b"]);
    system.vote(&actor("a"), &poll, 10);

    assert_eq!(
        system.try_vote(&actor("b"), &poll, 10),
        Err(Rejection::PollClosed(poll.clone()))
    );
    system.create_actor("late", 10.0);
    system.register(&actor("late"), &poll);
    assert!(!system.poll(&poll).unwrap().is_registered(&actor("late")));
    assert_eq!(system.trust(&actor("b"), Category::Science), Some(50.0));
}

#[test]
fn operations_on_unknown_ids_change_nothing() {
    let mut system = system_with(&["a"]);
    let ghost_poll = PollId::new("ghost");
    system.register(&actor("a"), &ghost_poll);
    system.vote(&actor("a"), &ghost_poll, 5);
    system.open_default_poll(&actor("nobody"), Category::Science, "p");

    assert_eq!(system.polls().count(), 0);
    assert_close(system.balance(&actor("a")).unwrap(), 2.0);
    assert!(system.balance(&actor("nobody")).is_none());
}

// ---------------------------------------------------------------------------
// Degenerate tallies
// ---------------------------------------------------------------------------

#[test]
fn tie_pays_nothing_and_keeps_trust() {
    let mut system = system_with(&["a", "b"]);
    let poll = PollId::new("claim");
    open(&mut system, Category::Science, &poll, terms(2, 50.0));
    register_all(&mut system, &poll, &["a", "b"]);
    system.vote(&actor("a"), &poll, 3);
    system.vote(&actor("b"), &poll, 7);

    let p = system.poll(&poll).unwrap();
    assert!(p.is_finished());
    assert_eq!(p.status(), PollStatus::Tie);
    assert_close(p.settlement().unwrap().total_paid(), 0.0);
    assert_close(system.balance(&actor("req")).unwrap(), 1_000_000.0);
    assert_eq!(system.trust(&actor("a"), Category::Science), Some(50.0));
    assert_eq!(system.trust(&actor("b"), Category::Science), Some(50.0));
}

#[test]
fn zero_weight_holds_previous_score_by_default() {
    let mut system = system_with(&["a"]);
    system.create_actor("broke", 0.0);
    let poll = PollId::new("claim");
    open(&mut system, Category::Science, &poll, terms(3, 10.0));
    register_all(&mut system, &poll, &["broke", "a"]);

    system.vote(&actor("broke"), &poll, 0);
    assert_close(system.poll_score(&poll).unwrap(), 5.0);
    assert_eq!(system.poll_status(&poll), Some(PollStatus::Tie));

    // Once weight exists the zero-confidence vote contributes nothing.
    system.vote(&actor("a"), &poll, 9);
    assert_close(system.poll_score(&poll).unwrap(), 9.0);
}

#[test]
fn zero_weight_can_reset_to_neutral() {
    let config = EngineConfig::from_toml_str(
        r#"
        [params]
        zero_weight = "reset_neutral"
        "#,
    )
    .unwrap();
    assert_eq!(config.params.zero_weight, ZeroWeightPolicy::ResetNeutral);

    let mut system = FactCheckSystem::new(config);
    system.create_actor("req", 1_000.0);
    system.create_actor("broke", 0.0);
    let poll = PollId::new("claim");
    open(&mut system, Category::Science, &poll, terms(2, 10.0));
    system.register(&actor("broke"), &poll);
    system.vote(&actor("broke"), &poll, 10);
    assert_close(system.poll_score(&poll).unwrap(), 5.0);
    assert_eq!(system.poll_status(&poll), Some(PollStatus::Tie));
}

#[test]
fn all_zero_confidence_poll_finishes_without_payout() {
    let mut system = system_with(&[]);
    system.create_actor("x", 0.0);
    system.create_actor("y", 0.0);
    let poll = PollId::new("claim");
    open(&mut system, Category::Science, &poll, terms(2, 10.0));
    register_all(&mut system, &poll, &["x", "y"]);
    system.vote(&actor("x"), &poll, 10);
    system.vote(&actor("y"), &poll, 10);

    let p = system.poll(&poll).unwrap();
    assert!(p.is_finished());
    assert_close(p.settlement().unwrap().total_paid(), 0.0);
    assert_close(system.balance(&actor("req")).unwrap(), 1_000_000.0);
}

// ---------------------------------------------------------------------------
// Negative balances
// ---------------------------------------------------------------------------

/// Drive "debtor" from 2 to -2 by having it fund two single-vote polls that
/// each pay 2 to "x".
fn push_into_debt(system: &mut FactCheckSystem) {
    system.create_actor("x", 2.0);
    for side in ["side-q", "side-r"] {
        let side = PollId::new(side);
        system.open_poll(&actor("debtor"), Category::Health, side, terms(1, 2.0));
    }
    for side in ["side-q", "side-r"] {
        let side = PollId::new(side);
        system.register(&actor("x"), &side);
        system.vote(&actor("x"), &side, 10);
        assert_eq!(system.is_finished(&side), Some(true));
    }
}

#[test]
fn debtor_vote_counts_with_negative_weight_and_earns_when_it_dissents() {
    let mut system = system_with(&["b", "debtor"]);
    system.create_actor("a", 4.0);
    let poll = PollId::new("claim");
    open(&mut system, Category::Science, &poll, terms(3, 90.0));
    register_all(&mut system, &poll, &["a", "b", "debtor"]);

    push_into_debt(&mut system);
    assert_close(system.balance(&actor("debtor")).unwrap(), -2.0);

    // a: confidence 200 voting Real.
    let receipt = system.try_vote(&actor("a"), &poll, 10).expect("accepted");
    assert_close(receipt.score, 10.0);

    // The debtor votes Fake with confidence -100, which pushes the score
    // further towards Real: (200·10 − 100·0) / (200 − 100) = 20.
    let receipt = system
        .try_vote(&actor("debtor"), &poll, 0)
        .expect("negative confidence is permitted by default");
    assert_close(receipt.confidence, -100.0);
    assert_close(receipt.score, 20.0);
    assert_eq!(receipt.status, PollStatus::Real);

    // b: confidence 100 voting Real, filling the quota.
    // (2000 + 1000) / (300 − 100) = 15.
    let receipt = system.try_vote(&actor("b"), &poll, 10).expect("accepted");
    assert_close(receipt.score, 15.0);
    let settlement = receipt.settlement.expect("third vote finalizes");
    assert_eq!(settlement.status, PollStatus::Real);

    let p = system.poll(&poll).unwrap();
    assert_eq!(p.confidences(), &[200.0, -100.0, 100.0]);

    // Factors: a 200·1, debtor −100·−1, b 100·1, out of 400.
    let debtor = settlement.payout(&actor("debtor")).unwrap();
    assert_close(debtor.credit, -1.0);
    assert_close(debtor.factor, 100.0);
    assert_close(debtor.reward, 22.5);
    assert_close(settlement.payout(&actor("a")).unwrap().reward, 45.0);
    assert_close(settlement.payout(&actor("b")).unwrap().reward, 22.5);
    assert_close(settlement.total_paid(), 90.0);

    assert_close(system.balance(&actor("debtor")).unwrap(), -2.0 + 22.5);
    assert_close(system.balance(&actor("a")).unwrap(), 4.0 + 45.0);

    // Trust still follows the vote, not the payout.
    let trust = |name: &str| system.trust(&actor(name), Category::Science);
    assert_eq!(trust("debtor"), Some(45.0));
    assert_eq!(trust("a"), Some(55.0));
    assert_eq!(trust("b"), Some(55.0));
}
