//! Vote values on the 0–10 truthfulness scale.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated vote: 0 = strongly fake, 5 = neutral, 10 = strongly real.
///
/// The inner value doubles as an index into the 11-bucket reward curve, so
/// construction is the only place the range is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct VoteValue(u8);

impl VoteValue {
    pub const FAKE: Self = Self(0);
    pub const NEUTRAL: Self = Self(5);
    pub const REAL: Self = Self(10);

    /// Number of distinct vote values.
    pub const BUCKETS: usize = 11;

    pub fn new(value: u8) -> Result<Self, TypesError> {
        if value <= Self::REAL.0 {
            Ok(Self(value))
        } else {
            Err(TypesError::InvalidVote(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Position in the reward curve.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The vote reflected around neutral (`10 − v`).
    pub fn mirrored(self) -> Self {
        Self(Self::REAL.0 - self.0)
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for VoteValue {
    type Error = TypesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VoteValue> for u8 {
    fn from(v: VoteValue) -> Self {
        v.0
    }
}

impl fmt::Display for VoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
