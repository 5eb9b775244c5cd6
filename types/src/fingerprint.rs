//! Poll identifiers — content fingerprints.
//!
//! A poll is keyed by a fingerprint of the claim under review. Callers may
//! supply any unique string; [`PollId::from_content`] derives the canonical
//! Blake2b-256 hex digest of the claim bytes.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

/// Length of the prefix shown by [`PollId::short`].
const SHORT_LEN: usize = 10;

/// Unique key of a fact-check poll.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(String);

impl PollId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Fingerprint arbitrary content with Blake2b-256, hex encoded.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(content);
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for human-readable reports.
    pub fn short(&self) -> &str {
        self.0.get(..SHORT_LEN).unwrap_or(&self.0)
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PollId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PollId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
