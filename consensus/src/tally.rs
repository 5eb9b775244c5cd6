//! Confidence-weighted tally.

use crate::error::ConsensusError;
use factcheck_types::VoteValue;
use serde::{Deserialize, Serialize};

/// Whether the latest recompute carried any weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsensusSignal {
    /// The weights summed to a non-zero value and produced a score.
    #[default]
    Weighted,
    /// The weights summed to exactly zero; no score could be derived.
    NoConsensusSignal,
}

/// `Σ(vote_i × confidence_i) / Σ(confidence_i)`.
///
/// Returns `Ok(None)` when the confidence sum is exactly zero (including
/// the empty tally). Confidences may be negative, in which case the result
/// can leave the 0–10 scale.
pub fn weighted_score(
    votes: &[VoteValue],
    confidences: &[f64],
) -> Result<Option<f64>, ConsensusError> {
    if votes.len() != confidences.len() {
        return Err(ConsensusError::LengthMismatch {
            votes: votes.len(),
            confidences: confidences.len(),
        });
    }
    let (weighted, total) = votes
        .iter()
        .zip(confidences)
        .fold((0.0, 0.0), |(weighted, total), (vote, confidence)| {
            (weighted + vote.as_f64() * confidence, total + confidence)
        });
    if total == 0.0 {
        return Ok(None);
    }
    Ok(Some(weighted / total))
}
