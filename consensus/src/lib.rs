//! Consensus — turning confidence-weighted votes into a verdict.
//!
//! Every accepted vote triggers a full recompute over the poll's votes:
//! - the consensus score is the confidence-weighted mean of all vote values;
//! - the status follows from the score (Real above 5, Fake below, Tie at 5);
//! - each voter's pending truthfulness delta is re-derived from the reward
//!   curve under the new status.
//!
//! ## Module overview
//!
//! - [`curve`] — The fixed 11-bucket reward curve.
//! - [`tally`] — Weighted score computation and the zero-weight signal.
//! - [`engine`] — The recompute entry point combining tally and curve.
//! - [`error`] — Consensus error types.

pub mod curve;
pub mod engine;
pub mod error;
pub mod tally;

pub use curve::RewardCurve;
pub use engine::{ConsensusEngine, ConsensusUpdate};
pub use error::ConsensusError;
pub use tally::{weighted_score, ConsensusSignal};
