//! Errors raised while constructing the shared types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypesError {
    #[error("vote value {0} is outside 0..=10")]
    InvalidVote(u8),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("poll term `{field}` must be finite and non-negative, got {value}")]
    InvalidTerm { field: &'static str, value: f64 },

    #[error("poll vote quota must be at least 1")]
    ZeroQuota,

    #[error("mechanism parameter `{field}` is out of range, got {value}")]
    InvalidParam { field: &'static str, value: f64 },
}
