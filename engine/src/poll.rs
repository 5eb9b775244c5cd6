//! The poll entity — one fact-check contest.

use factcheck_consensus::{ConsensusSignal, ConsensusUpdate};
use factcheck_settlement::{Ballot, Settlement};
use factcheck_types::{ActorId, Category, Credits, PollId, PollStatus, PollTerms, VoteValue};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Configuration, running tally and status of one poll.
///
/// `voters`, `votes` and `confidences` are parallel sequences in vote
/// order. Every mutation goes through the engine, which keeps them the
/// same length, keeps `voters ⊆ registered`, and never lets the tally
/// exceed the quota.
#[derive(Clone, Debug, Serialize)]
pub struct Poll {
    id: PollId,
    requester: ActorId,
    category: Category,
    terms: PollTerms,
    score: f64,
    status: PollStatus,
    signal: ConsensusSignal,
    registered: HashSet<ActorId>,
    voters: Vec<ActorId>,
    votes: Vec<VoteValue>,
    confidences: Vec<f64>,
    truthfulness: HashMap<ActorId, f64>,
    finished: bool,
    valid: bool,
    settlement: Option<Settlement>,
}

impl Poll {
    /// Build a poll. `valid` is fixed here from the requester's balance and
    /// the worst-case payout; an invalid poll must not be stored.
    pub fn new(
        id: PollId,
        requester: ActorId,
        category: Category,
        terms: PollTerms,
        requester_balance: Credits,
    ) -> Self {
        let valid = terms.is_affordable(requester_balance);
        Self {
            id,
            requester,
            category,
            terms,
            score: PollStatus::NEUTRAL_SCORE,
            status: PollStatus::Tie,
            signal: ConsensusSignal::Weighted,
            registered: HashSet::new(),
            voters: Vec::new(),
            votes: Vec::new(),
            confidences: Vec::new(),
            truthfulness: HashMap::new(),
            finished: false,
            valid,
            settlement: None,
        }
    }

    pub fn id(&self) -> &PollId {
        &self.id
    }

    pub fn requester(&self) -> &ActorId {
        &self.requester
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn terms(&self) -> &PollTerms {
        &self.terms
    }

    /// Consensus score on the 0–10 scale; 5 until the first weighted vote.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn status(&self) -> PollStatus {
        self.status
    }

    /// Whether the last recompute had any weight to work with.
    pub fn signal(&self) -> ConsensusSignal {
        self.signal
    }

    pub fn registered(&self) -> &HashSet<ActorId> {
        &self.registered
    }

    pub fn voters(&self) -> &[ActorId] {
        &self.voters
    }

    pub fn votes(&self) -> &[VoteValue] {
        &self.votes
    }

    pub fn confidences(&self) -> &[f64] {
        &self.confidences
    }

    /// Pending trust delta of a voter, as left by the last recompute.
    pub fn pending_delta(&self, voter: &ActorId) -> Option<f64> {
        self.truthfulness.get(voter).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Accepting registrations and votes.
    pub fn is_open(&self) -> bool {
        self.valid && !self.finished
    }

    pub fn is_registered(&self, actor: &ActorId) -> bool {
        self.registered.contains(actor)
    }

    pub fn has_voted(&self, actor: &ActorId) -> bool {
        self.voters.contains(actor)
    }

    pub fn quota_reached(&self) -> bool {
        self.votes.len() == self.terms.max_votes as usize
    }

    pub fn remaining_votes(&self) -> usize {
        (self.terms.max_votes as usize).saturating_sub(self.votes.len())
    }

    /// The payout record, present once the poll is finished.
    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Snapshot of every vote for the distributor.
    pub fn ballots(&self) -> Vec<Ballot> {
        self.voters
            .iter()
            .zip(&self.votes)
            .zip(&self.confidences)
            .map(|((voter, vote), confidence)| Ballot {
                voter: voter.clone(),
                vote: *vote,
                confidence: *confidence,
                pending_delta: self.pending_delta(voter).unwrap_or(0.0),
            })
            .collect()
    }

    pub(crate) fn register(&mut self, actor: ActorId) {
        self.registered.insert(actor);
    }

    pub(crate) fn record_vote(&mut self, voter: ActorId, vote: VoteValue, confidence: f64) {
        self.voters.push(voter);
        self.votes.push(vote);
        self.confidences.push(confidence);
    }

    /// Adopt a recompute: score, status, and every voter's pending delta
    /// (overwriting the previous ones).
    pub(crate) fn apply_consensus(&mut self, update: &ConsensusUpdate) {
        self.score = update.score;
        self.status = update.status;
        self.signal = update.signal;
        for (voter, delta) in self.voters.iter().zip(&update.truthfulness) {
            self.truthfulness.insert(voter.clone(), *delta);
        }
    }

    pub(crate) fn finish(&mut self, settlement: Settlement) {
        self.finished = true;
        self.settlement = Some(settlement);
    }
}
