//! Poll settlement — the one-time payout when a poll reaches its vote quota.
//!
//! Given the final verdict, each voter's credit is read fresh from the
//! reward curve and weighted by the voter's confidence. Voters on the wrong
//! side of consensus weigh nothing; the poll's reward budget is split
//! among the rest in proportion to their weight. Trust deltas accumulated
//! during voting are carried through unless the poll ended in a tie.
//!
//! This crate computes the settlement; applying the transfers is the
//! engine's job.

pub mod distributor;
pub mod outcome;

pub use distributor::{compute_settlement, Ballot};
pub use outcome::{Settlement, VoterPayout};
