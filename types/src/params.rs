//! Mechanism parameters and per-poll economic terms.
//!
//! Every field has a serde default so configuration files only need to
//! name the values they change.

use crate::amount::Credits;
use crate::error::TypesError;
use crate::trust::TrustScore;
use serde::{Deserialize, Serialize};

/// What a consensus recompute does when the confidence weights sum to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWeightPolicy {
    /// Keep the previous score and status.
    #[default]
    HoldPrevious,
    /// Reset the score to neutral (status becomes Tie).
    ResetNeutral,
}

/// Whether a voter with a negative balance (and therefore a non-positive
/// confidence) may vote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeConfidencePolicy {
    /// Accept the vote; its weight enters the tally with its sign.
    #[default]
    Permit,
    /// Ignore votes from actors whose balance is below zero.
    Reject,
}

/// Engine-wide tunables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechanismParams {
    /// Trust an actor holds in a category before it is first judged there.
    pub default_trust: f64,

    /// Scale applied to a curve credit to obtain a pending trust delta.
    pub trust_multiplier: f64,

    /// Balance given to actors created without an explicit one.
    pub default_balance: Credits,

    pub zero_weight: ZeroWeightPolicy,

    pub negative_confidence: NegativeConfidencePolicy,
}

impl MechanismParams {
    /// Reject tunables that would corrupt trust or confidence: a
    /// non-finite multiplier or balance, or a default trust outside
    /// `[0, 100]`.
    pub fn validate(&self) -> Result<(), TypesError> {
        let trust = self.default_trust;
        let range = TrustScore::MIN.value()..=TrustScore::MAX.value();
        if !range.contains(&trust) {
            return Err(TypesError::InvalidParam {
                field: "default_trust",
                value: trust,
            });
        }
        let finite = [
            ("trust_multiplier", self.trust_multiplier),
            ("default_balance", self.default_balance),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TypesError::InvalidParam { field, value });
            }
        }
        Ok(())
    }
}

impl Default for MechanismParams {
    fn default() -> Self {
        Self {
            default_trust: TrustScore::DEFAULT.value(),
            trust_multiplier: 5.0,
            default_balance: 10_000.0,
            zero_weight: ZeroWeightPolicy::default(),
            negative_confidence: NegativeConfidencePolicy::default(),
        }
    }
}

/// Economic terms of a single poll, fixed when it is opened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollTerms {
    /// Vote quota; reaching it finalizes the poll.
    pub max_votes: u32,
    /// Trust required in the poll's category to register.
    pub minimum_trust: f64,
    /// Paid by each registrant to the requester.
    pub registration_fee: Credits,
    /// Paid by the requester to each voter when the vote is cast.
    pub participation_reward: Credits,
    /// Budget split among voters aligned with the final consensus.
    pub max_reward: Credits,
}

impl Default for PollTerms {
    fn default() -> Self {
        Self {
            max_votes: 50,
            minimum_trust: 25.0,
            registration_fee: 10.0,
            participation_reward: 1.0,
            max_reward: 100.0,
        }
    }
}

impl PollTerms {
    /// Balance the requester must hold for the poll to be valid:
    /// `(max_reward + participation_reward − registration_fee) × max_votes`.
    pub fn worst_case_payout(&self) -> Credits {
        (self.max_reward + self.participation_reward - self.registration_fee)
            * f64::from(self.max_votes)
    }

    /// Whether `balance` covers the worst-case payout.
    pub fn is_affordable(&self, balance: Credits) -> bool {
        balance >= self.worst_case_payout()
    }

    /// Reject terms the engine cannot settle: a zero quota or a negative
    /// or non-finite amount.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.max_votes == 0 {
            return Err(TypesError::ZeroQuota);
        }
        let amounts = [
            ("minimum_trust", self.minimum_trust),
            ("registration_fee", self.registration_fee),
            ("participation_reward", self.participation_reward),
            ("max_reward", self.max_reward),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(TypesError::InvalidTerm { field, value });
            }
        }
        Ok(())
    }
}
