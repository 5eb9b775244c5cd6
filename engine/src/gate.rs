//! Registration and voting gates.
//!
//! Each gate is an ordered list of named checks over a snapshot of the
//! relevant actor and poll state. Checks run in order and the first failure
//! is the rejection reason; nothing is mutated until every check passes.

use crate::rejection::Rejection;
use factcheck_types::{ActorId, Credits, NegativeConfidencePolicy, PollId, TrustScore};

/// Everything the registration gate looks at.
#[derive(Clone, Debug)]
pub struct RegistrationContext<'a> {
    pub actor: &'a ActorId,
    pub poll: &'a PollId,
    pub already_registered: bool,
    pub trust: TrustScore,
    pub minimum_trust: f64,
    pub balance: Credits,
    pub registration_fee: Credits,
    pub poll_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationCheck {
    NotAlreadyRegistered,
    MeetsMinimumTrust,
    CoversRegistrationFee,
    PollOpen,
}

/// Registration preconditions, in evaluation order.
pub const REGISTRATION_GATE: [RegistrationCheck; 4] = [
    RegistrationCheck::NotAlreadyRegistered,
    RegistrationCheck::MeetsMinimumTrust,
    RegistrationCheck::CoversRegistrationFee,
    RegistrationCheck::PollOpen,
];

impl RegistrationCheck {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotAlreadyRegistered => "not_already_registered",
            Self::MeetsMinimumTrust => "meets_minimum_trust",
            Self::CoversRegistrationFee => "covers_registration_fee",
            Self::PollOpen => "poll_open",
        }
    }

    pub fn check(&self, ctx: &RegistrationContext<'_>) -> Result<(), Rejection> {
        match self {
            Self::NotAlreadyRegistered if ctx.already_registered => {
                Err(Rejection::AlreadyRegistered {
                    actor: ctx.actor.clone(),
                    poll: ctx.poll.clone(),
                })
            }
            Self::MeetsMinimumTrust if ctx.trust.value() < ctx.minimum_trust => {
                Err(Rejection::InsufficientTrust {
                    have: ctx.trust.value(),
                    need: ctx.minimum_trust,
                })
            }
            Self::CoversRegistrationFee if ctx.balance < ctx.registration_fee => {
                Err(Rejection::InsufficientBalance {
                    have: ctx.balance,
                    need: ctx.registration_fee,
                })
            }
            Self::PollOpen if !ctx.poll_open => Err(Rejection::PollClosed(ctx.poll.clone())),
            _ => Ok(()),
        }
    }
}

/// Run the registration gate.
pub fn evaluate_registration(ctx: &RegistrationContext<'_>) -> Result<(), Rejection> {
    REGISTRATION_GATE.iter().try_for_each(|c| c.check(ctx))
}

/// Everything the voting gate looks at.
#[derive(Clone, Debug)]
pub struct VoteContext<'a> {
    pub actor: &'a ActorId,
    pub poll: &'a PollId,
    pub already_voted: bool,
    pub registered: bool,
    pub poll_open: bool,
    pub balance: Credits,
    pub negative_confidence: NegativeConfidencePolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteCheck {
    NotAlreadyVoted,
    IsRegistered,
    PollOpen,
    /// Only enforced under [`NegativeConfidencePolicy::Reject`].
    NonNegativeConfidence,
}

/// Voting preconditions, in evaluation order.
pub const VOTE_GATE: [VoteCheck; 4] = [
    VoteCheck::NotAlreadyVoted,
    VoteCheck::IsRegistered,
    VoteCheck::PollOpen,
    VoteCheck::NonNegativeConfidence,
];

impl VoteCheck {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotAlreadyVoted => "not_already_voted",
            Self::IsRegistered => "is_registered",
            Self::PollOpen => "poll_open",
            Self::NonNegativeConfidence => "non_negative_confidence",
        }
    }

    pub fn check(&self, ctx: &VoteContext<'_>) -> Result<(), Rejection> {
        match self {
            Self::NotAlreadyVoted if ctx.already_voted => Err(Rejection::AlreadyVoted {
                actor: ctx.actor.clone(),
                poll: ctx.poll.clone(),
            }),
            Self::IsRegistered if !ctx.registered => Err(Rejection::NotRegistered {
                actor: ctx.actor.clone(),
                poll: ctx.poll.clone(),
            }),
            Self::PollOpen if !ctx.poll_open => Err(Rejection::PollClosed(ctx.poll.clone())),
            Self::NonNegativeConfidence
                if ctx.negative_confidence == NegativeConfidencePolicy::Reject
                    && ctx.balance < 0.0 =>
            {
                Err(Rejection::NegativeConfidence {
                    actor: ctx.actor.clone(),
                    balance: ctx.balance,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Run the voting gate.
pub fn evaluate_vote(ctx: &VoteContext<'_>) -> Result<(), Rejection> {
    VOTE_GATE.iter().try_for_each(|c| c.check(ctx))
}
