//! The reward curve: a fixed symmetric table mapping a vote value to a
//! signed credit in `[-1, 1]`.

use factcheck_types::{PollStatus, VoteValue};

/// Credit per vote value, linearly spaced from −1.0 (vote 0) to +1.0
/// (vote 10) in steps of 0.2.
const LINEAR_BUCKETS: [f64; VoteValue::BUCKETS] =
    [-1.0, -0.8, -0.6, -0.4, -0.2, 0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Lookup table shared by the incremental recompute and the settlement.
///
/// Both must read the same table for the final trust deltas and rewards to
/// agree, so the engine builds one curve and hands it to both.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardCurve {
    buckets: [f64; VoteValue::BUCKETS],
}

impl RewardCurve {
    pub fn linear() -> Self {
        Self {
            buckets: LINEAR_BUCKETS,
        }
    }

    /// Raw credit of a vote under a verdict.
    ///
    /// Real reads the curve directly, Fake reads it mirrored, Tie credits
    /// nobody.
    pub fn credit(&self, vote: VoteValue, status: PollStatus) -> f64 {
        match status {
            PollStatus::Real => self.buckets[vote.index()],
            PollStatus::Fake => self.buckets[vote.mirrored().index()],
            PollStatus::Tie => 0.0,
        }
    }

    pub fn buckets(&self) -> &[f64; VoteValue::BUCKETS] {
        &self.buckets
    }
}

impl Default for RewardCurve {
    fn default() -> Self {
        Self::linear()
    }
}
