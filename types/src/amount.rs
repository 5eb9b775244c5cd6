//! Credit amounts.
//!
//! Balances are abstract numeric credits, not a settlement asset. They are
//! signed and real-valued: proportional reward shares are fractional, and
//! an over-committed requester can be driven below zero.

/// A signed, real-valued credit amount.
pub type Credits = f64;
