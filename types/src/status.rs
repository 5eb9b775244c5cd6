//! Poll status derived from the consensus score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The verdict a consensus score maps to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollStatus {
    /// Score above neutral: the claim is judged true.
    Real,
    /// Score below neutral: the claim is judged false.
    Fake,
    /// Score exactly neutral.
    #[default]
    Tie,
}

impl PollStatus {
    /// The neutral point of the 0–10 consensus scale.
    pub const NEUTRAL_SCORE: f64 = 5.0;

    /// Real if `score > 5`, Fake if `score < 5`, Tie otherwise.
    pub fn from_score(score: f64) -> Self {
        if score > Self::NEUTRAL_SCORE {
            Self::Real
        } else if score < Self::NEUTRAL_SCORE {
            Self::Fake
        } else {
            Self::Tie
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Fake => "Fake",
            Self::Tie => "Tie",
        }
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(PollStatus::from_score(10.0), PollStatus::Real);
        assert_eq!(PollStatus::from_score(5.000_001), PollStatus::Real);
        assert_eq!(PollStatus::from_score(5.0), PollStatus::Tie);
        assert_eq!(PollStatus::from_score(4.999_999), PollStatus::Fake);
        assert_eq!(PollStatus::from_score(0.0), PollStatus::Fake);
    }

    #[test]
    fn default_is_tie() {
        assert_eq!(PollStatus::default(), PollStatus::Tie);
    }
}
