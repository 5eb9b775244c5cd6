//! Ledger of fact-check participants.
//!
//! Holds every actor's credit balance and per-category trust score. The
//! ledger is a plain in-memory accounting model: transfers move credits
//! between actors without overdraft protection, and trust scores default
//! to a configured value the first time a category is touched.

pub mod actor;
pub mod error;
pub mod store;
pub mod trust;

pub use actor::Actor;
pub use error::LedgerError;
pub use store::{ActorStore, LedgerSummary};
pub use trust::TrustTable;
