//! The recompute entry point.

use crate::curve::RewardCurve;
use crate::error::ConsensusError;
use crate::tally::{weighted_score, ConsensusSignal};
use factcheck_types::{MechanismParams, PollStatus, VoteValue, ZeroWeightPolicy};

/// Result of recomputing a poll's consensus after a vote.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusUpdate {
    pub score: f64,
    pub status: PollStatus,
    pub signal: ConsensusSignal,
    /// Pending trust delta per voter, in vote order.
    pub truthfulness: Vec<f64>,
}

/// Stateless consensus policy: curve, trust multiplier and zero-weight rule.
#[derive(Clone, Debug)]
pub struct ConsensusEngine {
    curve: RewardCurve,
    trust_multiplier: f64,
    zero_weight: ZeroWeightPolicy,
}

impl ConsensusEngine {
    pub fn new(curve: RewardCurve, trust_multiplier: f64, zero_weight: ZeroWeightPolicy) -> Self {
        Self {
            curve,
            trust_multiplier,
            zero_weight,
        }
    }

    /// Engine with the linear curve and the given mechanism parameters.
    pub fn from_params(params: &MechanismParams) -> Self {
        Self::new(
            RewardCurve::linear(),
            params.trust_multiplier,
            params.zero_weight,
        )
    }

    pub fn curve(&self) -> &RewardCurve {
        &self.curve
    }

    pub fn trust_multiplier(&self) -> f64 {
        self.trust_multiplier
    }

    /// Recompute score, status and every voter's pending delta.
    ///
    /// When the confidences sum to zero the score is resolved by the
    /// zero-weight policy and the update carries
    /// [`ConsensusSignal::NoConsensusSignal`]. Deltas are always derived
    /// from the status the update reports.
    pub fn recompute(
        &self,
        previous_score: f64,
        previous_status: PollStatus,
        votes: &[VoteValue],
        confidences: &[f64],
    ) -> Result<ConsensusUpdate, ConsensusError> {
        let (score, status, signal) = match weighted_score(votes, confidences)? {
            Some(score) => (
                score,
                PollStatus::from_score(score),
                ConsensusSignal::Weighted,
            ),
            None => match self.zero_weight {
                ZeroWeightPolicy::HoldPrevious => (
                    previous_score,
                    previous_status,
                    ConsensusSignal::NoConsensusSignal,
                ),
                ZeroWeightPolicy::ResetNeutral => (
                    PollStatus::NEUTRAL_SCORE,
                    PollStatus::Tie,
                    ConsensusSignal::NoConsensusSignal,
                ),
            },
        };
        Ok(ConsensusUpdate {
            score,
            status,
            signal,
            truthfulness: self.truthfulness_deltas(status, votes),
        })
    }

    /// `credit × multiplier` for each vote under `status`.
    pub fn truthfulness_deltas(&self, status: PollStatus, votes: &[VoteValue]) -> Vec<f64> {
        votes
            .iter()
            .map(|vote| self.curve.credit(*vote, status) * self.trust_multiplier)
            .collect()
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::from_params(&MechanismParams::default())
    }
}
