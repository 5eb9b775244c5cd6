//! Rejection reasons.
//!
//! None of these is fatal: a rejected request leaves every actor and poll
//! exactly as it found them.

use factcheck_consensus::ConsensusError;
use factcheck_ledger::LedgerError;
use factcheck_types::{ActorId, Credits, PollId, TypesError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("unknown actor: {0}")]
    UnknownActor(ActorId),

    #[error("unknown poll: {0}")]
    UnknownPoll(PollId),

    #[error("actor {0} already exists")]
    DuplicateActor(ActorId),

    #[error("poll {0} already exists")]
    DuplicatePoll(PollId),

    #[error("actor {actor} is already registered for poll {poll}")]
    AlreadyRegistered { actor: ActorId, poll: PollId },

    #[error("actor {actor} has already voted on poll {poll}")]
    AlreadyVoted { actor: ActorId, poll: PollId },

    #[error("actor {actor} is not registered for poll {poll}")]
    NotRegistered { actor: ActorId, poll: PollId },

    #[error("insufficient trust: have {have}, need {need}")]
    InsufficientTrust { have: f64, need: f64 },

    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Credits, need: Credits },

    #[error("poll {0} is closed")]
    PollClosed(PollId),

    #[error("invalid poll configuration: {0}")]
    InvalidPollConfiguration(PollConfigIssue),

    #[error("vote value {0} is outside 0..=10")]
    InvalidVote(u8),

    #[error("actor {actor} has negative balance {balance} and cannot vote")]
    NegativeConfidence { actor: ActorId, balance: Credits },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Consensus(#[from] ConsensusError),
}

/// Why a poll could not be opened.
#[derive(Debug, Error, PartialEq)]
pub enum PollConfigIssue {
    #[error("requester balance {balance} cannot cover worst-case payout {worst_case}")]
    Unaffordable {
        balance: Credits,
        worst_case: Credits,
    },

    #[error(transparent)]
    Terms(#[from] TypesError),
}

impl From<PollConfigIssue> for Rejection {
    fn from(issue: PollConfigIssue) -> Self {
        Self::InvalidPollConfiguration(issue)
    }
}
