//! The fact-check engine.
//!
//! A requester opens a poll on a claim and funds its rewards. Other actors
//! register (paying a fee, gated by trust and balance) and each casts one
//! vote from 0 (fake) to 10 (real). Every vote is weighted by the voter's
//! confidence (balance × trust in the poll's category) and triggers a
//! consensus recompute. The vote that fills the quota finalizes the poll:
//! the reward budget is split among voters aligned with the verdict and
//! trust scores move.
//!
//! ## Module overview
//!
//! - [`system`] — [`FactCheckSystem`], the store and public operations.
//! - [`poll`] — The poll entity and its tally.
//! - [`gate`] — Ordered precondition lists for registration and voting.
//! - [`rejection`] — Why a request was ignored.
//! - [`config`] — TOML-backed engine configuration.
//!
//! Ineligible requests are ignored, not failed: the plain operations
//! (`register`, `vote`, ...) log the reason and return. The `try_*`
//! variants return the [`Rejection`] for callers that want it.

pub mod config;
pub mod gate;
pub mod poll;
pub mod rejection;
pub mod system;

pub use config::{ConfigError, EngineConfig};
pub use gate::{RegistrationCheck, VoteCheck, REGISTRATION_GATE, VOTE_GATE};
pub use poll::Poll;
pub use rejection::{PollConfigIssue, Rejection};
pub use system::{FactCheckSystem, VoteReceipt};
