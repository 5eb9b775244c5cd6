use factcheck_types::ActorId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("actor not found: {0}")]
    UnknownActor(ActorId),

    #[error("actor already exists: {0}")]
    ActorExists(ActorId),

    #[error("credit amount must be finite, got {0}")]
    InvalidAmount(f64),
}
