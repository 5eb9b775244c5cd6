//! The fact-check system — actor store, poll registry and the four public
//! operations.

use crate::config::EngineConfig;
use crate::gate::{self, RegistrationContext, VoteContext};
use crate::poll::Poll;
use crate::rejection::{PollConfigIssue, Rejection};
use factcheck_consensus::{ConsensusEngine, ConsensusSignal};
use factcheck_ledger::{Actor, ActorStore, LedgerError, LedgerSummary};
use factcheck_settlement::{compute_settlement, Settlement};
use factcheck_types::{
    ActorId, Category, Credits, MechanismParams, PollId, PollStatus, PollTerms, TrustScore,
    VoteValue,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// What an accepted vote did.
#[derive(Clone, Debug, PartialEq)]
pub struct VoteReceipt {
    /// Weight recorded for the vote.
    pub confidence: f64,
    /// Consensus after the recompute this vote triggered.
    pub score: f64,
    pub status: PollStatus,
    pub signal: ConsensusSignal,
    /// Present when this vote filled the quota and finalized the poll.
    pub settlement: Option<Settlement>,
}

/// In-memory fact-check mechanism.
///
/// Owns every actor and poll. Operations are applied one at a time through
/// `&mut self`, so each fully commits before the next begins.
pub struct FactCheckSystem {
    actors: ActorStore,
    polls: HashMap<PollId, Poll>,
    params: MechanismParams,
    default_terms: PollTerms,
    consensus: ConsensusEngine,
}

impl FactCheckSystem {
    pub fn new(config: EngineConfig) -> Self {
        let EngineConfig {
            params,
            default_terms,
        } = config;
        Self {
            actors: ActorStore::new(TrustScore::new(params.default_trust)),
            polls: HashMap::new(),
            consensus: ConsensusEngine::from_params(&params),
            params,
            default_terms,
        }
    }

    pub fn params(&self) -> &MechanismParams {
        &self.params
    }

    pub fn default_terms(&self) -> &PollTerms {
        &self.default_terms
    }

    // ── Actors ──────────────────────────────────────────────────────────

    /// Add an actor. A duplicate id is rejected and the existing actor kept.
    pub fn try_create_actor(
        &mut self,
        id: impl Into<ActorId>,
        balance: Credits,
    ) -> Result<(), Rejection> {
        let id = id.into();
        match self.actors.create(id.clone(), balance) {
            Ok(_) => {
                debug!(actor = %id, balance, "actor created");
                Ok(())
            }
            Err(LedgerError::ActorExists(id)) => Err(Rejection::DuplicateActor(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn create_actor(&mut self, id: impl Into<ActorId>, balance: Credits) {
        let result = self.try_create_actor(id, balance);
        ignore("create_actor", result);
    }

    /// Add an actor holding the configured default balance.
    pub fn create_default_actor(&mut self, id: impl Into<ActorId>) {
        let balance = self.params.default_balance;
        self.create_actor(id, balance);
    }

    // ── Polls ───────────────────────────────────────────────────────────

    /// Open a poll. It is stored only if the requester can cover the
    /// worst-case payout; otherwise `poll_id` stays unbound.
    pub fn try_open_poll(
        &mut self,
        requester: &ActorId,
        category: Category,
        poll_id: impl Into<PollId>,
        terms: PollTerms,
    ) -> Result<(), Rejection> {
        let poll_id = poll_id.into();
        let balance = self
            .actors
            .balance(requester)
            .ok_or_else(|| Rejection::UnknownActor(requester.clone()))?;
        if self.polls.contains_key(&poll_id) {
            return Err(Rejection::DuplicatePoll(poll_id));
        }
        terms.validate().map_err(PollConfigIssue::from)?;

        let owner = requester.clone();
        let poll = Poll::new(poll_id.clone(), owner, category, terms, balance);
        if !poll.is_valid() {
            return Err(PollConfigIssue::Unaffordable {
                balance,
                worst_case: poll.terms().worst_case_payout(),
            }
            .into());
        }

        info!(
            poll = %poll_id,
            requester = %requester,
            %category,
            max_votes = poll.terms().max_votes,
            "poll opened"
        );
        self.polls.insert(poll_id, poll);
        Ok(())
    }

    pub fn open_poll(
        &mut self,
        requester: &ActorId,
        category: Category,
        poll_id: impl Into<PollId>,
        terms: PollTerms,
    ) {
        let result = self.try_open_poll(requester, category, poll_id, terms);
        ignore("open_poll", result);
    }

    /// Open a poll with the configured default terms.
    pub fn open_default_poll(
        &mut self,
        requester: &ActorId,
        category: Category,
        poll_id: impl Into<PollId>,
    ) {
        let terms = self.default_terms.clone();
        self.open_poll(requester, category, poll_id, terms);
    }

    // ── Registration ────────────────────────────────────────────────────

    /// Register an actor for a poll, paying the fee to the requester.
    pub fn try_register(&mut self, actor_id: &ActorId, poll_id: &PollId) -> Result<(), Rejection> {
        let actor = self
            .actors
            .get_mut(actor_id)
            .ok_or_else(|| Rejection::UnknownActor(actor_id.clone()))?;
        let poll = self
            .polls
            .get_mut(poll_id)
            .ok_or_else(|| Rejection::UnknownPoll(poll_id.clone()))?;

        let ctx = RegistrationContext {
            actor: actor_id,
            poll: poll_id,
            already_registered: poll.is_registered(actor_id),
            trust: actor.trust.score(poll.category()),
            minimum_trust: poll.terms().minimum_trust,
            balance: actor.balance,
            registration_fee: poll.terms().registration_fee,
            poll_open: poll.is_open(),
        };
        gate::evaluate_registration(&ctx)?;

        let fee = poll.terms().registration_fee;
        self.actors.transfer(actor_id, poll.requester(), fee)?;
        poll.register(actor_id.clone());
        debug!(actor = %actor_id, poll = %poll_id, fee, "actor registered");
        Ok(())
    }

    pub fn register(&mut self, actor_id: &ActorId, poll_id: &PollId) {
        let result = self.try_register(actor_id, poll_id);
        ignore("register", result);
    }

    // ── Voting ──────────────────────────────────────────────────────────

    /// Cast a vote from 0 (fake) to 10 (real).
    ///
    /// Records the vote with the actor's current confidence, pays the
    /// participation reward, recomputes consensus, and finalizes the poll
    /// if this vote fills the quota.
    pub fn try_vote(
        &mut self,
        actor_id: &ActorId,
        poll_id: &PollId,
        value: u8,
    ) -> Result<VoteReceipt, Rejection> {
        let vote = VoteValue::new(value).map_err(|_| Rejection::InvalidVote(value))?;
        let actor = self
            .actors
            .get_mut(actor_id)
            .ok_or_else(|| Rejection::UnknownActor(actor_id.clone()))?;
        let poll = self
            .polls
            .get_mut(poll_id)
            .ok_or_else(|| Rejection::UnknownPoll(poll_id.clone()))?;

        let ctx = VoteContext {
            actor: actor_id,
            poll: poll_id,
            already_voted: poll.has_voted(actor_id),
            registered: poll.is_registered(actor_id),
            poll_open: poll.is_open(),
            balance: actor.balance,
            negative_confidence: self.params.negative_confidence,
        };
        gate::evaluate_vote(&ctx)?;

        let confidence = actor.confidence(poll.category());
        let reward = poll.terms().participation_reward;
        self.actors.transfer(poll.requester(), actor_id, reward)?;
        poll.record_vote(actor_id.clone(), vote, confidence);

        let (score, status) = (poll.score(), poll.status());
        let update = self
            .consensus
            .recompute(score, status, poll.votes(), poll.confidences())?;
        if update.signal == ConsensusSignal::NoConsensusSignal {
            warn!(
                poll = %poll_id,
                votes = poll.votes().len(),
                score = update.score,
                "confidence weights sum to zero; no consensus signal"
            );
        }
        poll.apply_consensus(&update);
        debug!(
            actor = %actor_id,
            poll = %poll_id,
            %vote,
            confidence,
            score = update.score,
            status = %update.status,
            "vote recorded"
        );

        let settlement = if poll.quota_reached() {
            Some(self.finalize(poll_id)?)
        } else {
            None
        };

        Ok(VoteReceipt {
            confidence,
            score: update.score,
            status: update.status,
            signal: update.signal,
            settlement,
        })
    }

    pub fn vote(&mut self, actor_id: &ActorId, poll_id: &PollId, value: u8) {
        let result = self.try_vote(actor_id, poll_id, value);
        ignore("vote", result);
    }

    // ── Finalization ────────────────────────────────────────────────────

    /// Pay out rewards, apply trust deltas and close the poll. Runs once:
    /// a finished poll is rejected as closed.
    fn finalize(&mut self, poll_id: &PollId) -> Result<Settlement, Rejection> {
        let poll = self
            .polls
            .get_mut(poll_id)
            .ok_or_else(|| Rejection::UnknownPoll(poll_id.clone()))?;
        if poll.is_finished() {
            return Err(Rejection::PollClosed(poll_id.clone()));
        }

        let settlement = compute_settlement(
            self.consensus.curve(),
            poll_id,
            poll.status(),
            poll.score(),
            poll.terms().max_reward,
            &poll.ballots(),
        );

        for payout in &settlement.payouts {
            self.actors
                .transfer(poll.requester(), &payout.voter, payout.reward)?;
        }
        if settlement.adjusts_trust() {
            for payout in &settlement.payouts {
                if let Some(voter) = self.actors.get_mut(&payout.voter) {
                    voter.trust.apply_delta(poll.category(), payout.trust_delta);
                }
            }
        }

        if let Some(balance) = self.actors.balance(poll.requester()) {
            if balance < 0.0 {
                warn!(
                    poll = %poll_id,
                    requester = %poll.requester(),
                    balance,
                    "requester balance negative after settlement"
                );
            }
        }
        info!(
            poll = %poll_id,
            status = %settlement.status,
            score = settlement.score,
            paid = settlement.total_paid(),
            "poll finalized"
        );
        poll.finish(settlement.clone());
        Ok(settlement)
    }

    // ── Read-only accessors ─────────────────────────────────────────────

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn balance(&self, id: &ActorId) -> Option<Credits> {
        self.actors.balance(id)
    }

    /// Trust in a category. An untouched category reports the default.
    pub fn trust(&self, id: &ActorId, category: Category) -> Option<f64> {
        self.actors.trust(id, category).map(TrustScore::value)
    }

    pub fn poll(&self, id: &PollId) -> Option<&Poll> {
        self.polls.get(id)
    }

    pub fn poll_status(&self, id: &PollId) -> Option<PollStatus> {
        self.polls.get(id).map(Poll::status)
    }

    pub fn poll_score(&self, id: &PollId) -> Option<f64> {
        self.polls.get(id).map(Poll::score)
    }

    pub fn is_finished(&self, id: &PollId) -> Option<bool> {
        self.polls.get(id).map(Poll::is_finished)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn polls(&self) -> impl Iterator<Item = &Poll> {
        self.polls.values()
    }

    pub fn ledger_summary(&self) -> LedgerSummary {
        self.actors.summary()
    }
}

impl Default for FactCheckSystem {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Swallow a rejection, leaving a trace of it.
fn ignore<T>(operation: &'static str, result: Result<T, Rejection>) {
    if let Err(rejection) = result {
        debug!(operation, reason = %rejection, "request ignored");
    }
}
