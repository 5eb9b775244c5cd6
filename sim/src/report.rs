//! Per-round and whole-run reports.

use crate::population::PersonaKind;
use factcheck_types::{ActorId, PollStatus};
use serde::Serialize;
use std::fmt;

const RULE: &str = "--------------------------------------------------";

/// One voter's standing after a round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VoterLine {
    pub actor: ActorId,
    pub kind: PersonaKind,
    /// Balance gained since the start of the run.
    pub rewards: f64,
    pub trust: f64,
    pub vote: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub poll: String,
    pub truth: PollStatus,
    pub estimated: PollStatus,
    pub score: f64,
    pub voters: Vec<VoterLine>,
}

impl RoundReport {
    pub fn is_correct(&self) -> bool {
        self.truth == self.estimated
    }
}

fn verdict(vote: u8) -> &'static str {
    if vote >= 5 {
        "Real"
    } else {
        "Fake"
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Round {}", self.round)?;
        writeln!(
            f,
            "Poll {}: Truth = {}, Estimated = {}, Score = {:.2}",
            self.poll, self.truth, self.estimated, self.score
        )?;
        for line in &self.voters {
            writeln!(
                f,
                "{}: Rewards = {:.2}, Trust = {}, Voted = {}",
                line.actor,
                line.rewards,
                line.trust,
                verdict(line.vote)
            )?;
        }
        write!(f, "{RULE}")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub rounds: Vec<RoundReport>,
}

impl SimulationReport {
    /// Share of rounds whose verdict matched the truth.
    pub fn accuracy(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        let correct = self.rounds.iter().filter(|r| r.is_correct()).count();
        correct as f64 / self.rounds.len() as f64
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for round in &self.rounds {
            writeln!(f, "{round}")?;
        }
        write!(
            f,
            "{} rounds, seed {}, verdict accuracy {:.1}%",
            self.rounds.len(),
            self.seed,
            self.accuracy() * 100.0
        )
    }
}
