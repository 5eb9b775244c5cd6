//! Settlement records.

use factcheck_types::{ActorId, Credits, PollId, PollStatus, VoteValue};
use serde::{Deserialize, Serialize};

/// What one voter receives at finalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoterPayout {
    pub voter: ActorId,
    pub vote: VoteValue,
    /// Stake × trust weight recorded when the vote was cast.
    pub confidence: f64,
    /// Curve credit under the final verdict, in `[-1, 1]`.
    pub credit: f64,
    /// `max(0, confidence × credit)`.
    pub factor: f64,
    /// Share of the reward budget, paid by the requester.
    pub reward: Credits,
    /// Trust change in the poll's category (zero on a tie).
    pub trust_delta: f64,
}

/// The complete payout of a finalized poll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub poll: PollId,
    pub status: PollStatus,
    pub score: f64,
    pub max_reward: Credits,
    /// Sum of all voters' factors.
    pub total_factor: f64,
    /// One entry per voter, in vote order.
    pub payouts: Vec<VoterPayout>,
}

impl Settlement {
    /// Total credits paid out of the reward budget.
    pub fn total_paid(&self) -> Credits {
        self.payouts.iter().map(|p| p.reward).sum()
    }

    pub fn payout(&self, voter: &ActorId) -> Option<&VoterPayout> {
        self.payouts.iter().find(|p| &p.voter == voter)
    }

    /// Whether trust scores move as a result of this settlement.
    pub fn adjusts_trust(&self) -> bool {
        self.status != PollStatus::Tie
    }
}
