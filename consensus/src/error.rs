use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("vote/confidence length mismatch: {votes} votes, {confidences} confidences")]
    LengthMismatch { votes: usize, confidences: usize },
}
