//! Fundamental types for the fact-check engine.
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace: actor and poll identifiers, categories, vote values, poll
//! status, trust scores, and the tunable mechanism parameters.

pub mod actor;
pub mod amount;
pub mod category;
pub mod error;
pub mod fingerprint;
pub mod params;
pub mod status;
pub mod trust;
pub mod vote;

pub use actor::ActorId;
pub use amount::Credits;
pub use category::Category;
pub use error::TypesError;
pub use fingerprint::PollId;
pub use params::{MechanismParams, NegativeConfidencePolicy, PollTerms, ZeroWeightPolicy};
pub use status::PollStatus;
pub use trust::TrustScore;
pub use vote::VoteValue;
