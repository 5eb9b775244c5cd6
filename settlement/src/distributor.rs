//! Proportional reward distribution.

use crate::outcome::{Settlement, VoterPayout};
use factcheck_consensus::RewardCurve;
use factcheck_types::{ActorId, Credits, PollId, PollStatus, VoteValue};

/// One recorded vote as the distributor sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ballot {
    pub voter: ActorId,
    pub vote: VoteValue,
    pub confidence: f64,
    /// The truthfulness delta left by the last consensus recompute.
    pub pending_delta: f64,
}

/// Compute a poll's settlement.
///
/// `factor_i = max(0, confidence_i × credit_i)` and
/// `reward_i = factor_i / Σ factor × max_reward`, or zero for everyone if
/// the factors sum to zero. The credit is recomputed from `status` rather
/// than reused from the incremental recompute.
pub fn compute_settlement(
    curve: &RewardCurve,
    poll: &PollId,
    status: PollStatus,
    score: f64,
    max_reward: Credits,
    ballots: &[Ballot],
) -> Settlement {
    let weighted: Vec<(f64, f64)> = ballots
        .iter()
        .map(|ballot| {
            let credit = curve.credit(ballot.vote, status);
            (credit, (ballot.confidence * credit).max(0.0))
        })
        .collect();

    let total_factor: f64 = weighted.iter().map(|(_, factor)| factor).sum();

    let payouts = ballots
        .iter()
        .zip(&weighted)
        .map(|(ballot, &(credit, factor))| {
            let reward = if total_factor == 0.0 {
                0.0
            } else {
                factor / total_factor * max_reward
            };
            let trust_delta = match status {
                PollStatus::Tie => 0.0,
                PollStatus::Real | PollStatus::Fake => ballot.pending_delta,
            };
            VoterPayout {
                voter: ballot.voter.clone(),
                vote: ballot.vote,
                confidence: ballot.confidence,
                credit,
                factor,
                reward,
                trust_delta,
            }
        })
        .collect();

    Settlement {
        poll: poll.clone(),
        status,
        score,
        max_reward,
        total_factor,
        payouts,
    }
}
