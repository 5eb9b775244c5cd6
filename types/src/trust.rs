//! Per-category trust scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reputation score, always within `[0, 100]`.
///
/// Every constructor and adjustment clamps, so a `TrustScore` that exists
/// is in range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TrustScore(f64);

impl TrustScore {
    pub const MIN: Self = Self(0.0);
    pub const MAX: Self = Self(100.0);
    /// Score an actor holds in a category it has never been judged in.
    pub const DEFAULT: Self = Self(50.0);

    /// Clamp `value` into range. NaN maps to the minimum.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Apply a signed delta and clamp the result.
    pub fn adjusted(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for TrustScore {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for TrustScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for f64 {
    fn from(score: TrustScore) -> Self {
        score.0
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps() {
        assert_eq!(TrustScore::new(-3.0), TrustScore::MIN);
        assert_eq!(TrustScore::new(140.0), TrustScore::MAX);
        assert_eq!(TrustScore::new(f64::NAN), TrustScore::MIN);
        assert_eq!(TrustScore::new(42.5).value(), 42.5);
    }

    #[test]
    fn adjustment_saturates_at_bounds() {
        assert_eq!(TrustScore::new(98.0).adjusted(5.0), TrustScore::MAX);
        assert_eq!(TrustScore::new(2.0).adjusted(-5.0), TrustScore::MIN);
        assert_eq!(TrustScore::DEFAULT.adjusted(5.0).value(), 55.0);
    }
}
