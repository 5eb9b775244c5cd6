//! Round driver.

use crate::config::{SimConfig, SimConfigError};
use crate::population::{build_population, Persona};
use crate::report::{RoundReport, SimulationReport, VoterLine};
use factcheck_engine::{FactCheckSystem, Rejection};
use factcheck_types::{ActorId, PollId, PollStatus, PollTerms, VoteValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

/// Account that opens and funds every poll.
pub const SIMULATOR: &str = "simulator";

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] SimConfigError),

    #[error("engine rejected a simulated request: {0}")]
    Rejected(#[from] Rejection),

    #[error("actor {0} vanished from the engine")]
    MissingActor(ActorId),

    #[error("poll {0} vanished from the engine")]
    MissingPoll(PollId),
}

/// Terms of every simulated poll: everyone may join for free and the full
/// population must vote.
fn round_terms(config: &SimConfig, voters: usize) -> PollTerms {
    PollTerms {
        max_votes: u32::try_from(voters).unwrap_or(u32::MAX),
        minimum_trust: 0.0,
        registration_fee: 0.0,
        participation_reward: 0.0,
        max_reward: config.round.max_reward,
    }
}

/// The vote a persona casts: the truth with probability `accuracy`,
/// otherwise the opposite.
fn cast(rng: &mut StdRng, persona: &Persona, truth_is_real: bool) -> VoteValue {
    let says_real = if rng.gen_bool(persona.accuracy) {
        truth_is_real
    } else {
        !truth_is_real
    };
    if says_real {
        VoteValue::REAL
    } else {
        VoteValue::FAKE
    }
}

/// Run the configured number of rounds and report on each.
pub fn run_simulation(config: &SimConfig) -> Result<SimulationReport, SimError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.round.seed);
    let mut system = FactCheckSystem::new(config.engine.clone());
    let simulator = ActorId::new(SIMULATOR);
    system.try_create_actor(simulator.clone(), config.round.simulator_balance)?;

    let population = build_population(&config.population);
    for persona in &population {
        system.try_create_actor(persona.id.clone(), config.population.starting_balance)?;
    }
    info!(
        voters = population.len(),
        rounds = config.round.rounds,
        seed = config.round.seed,
        "simulation starting"
    );

    let category = config.round.category;
    let terms = round_terms(config, population.len());
    let mut rounds = Vec::with_capacity(config.round.rounds as usize);

    for round in 0..config.round.rounds {
        let poll_id = PollId::from_content(&rng.gen::<[u8; 16]>());
        system.try_open_poll(&simulator, category, poll_id.clone(), terms.clone())?;

        let truth_is_real = rng.gen_bool(0.5);
        let mut votes = Vec::with_capacity(population.len());
        for persona in &population {
            system.try_register(&persona.id, &poll_id)?;
            let vote = cast(&mut rng, persona, truth_is_real);
            system.try_vote(&persona.id, &poll_id, vote.get())?;
            votes.push(vote);
        }

        let poll = system
            .poll(&poll_id)
            .ok_or_else(|| SimError::MissingPoll(poll_id.clone()))?;
        let mut voters = Vec::with_capacity(population.len());
        for (persona, vote) in population.iter().zip(&votes) {
            let balance = system
                .balance(&persona.id)
                .ok_or_else(|| SimError::MissingActor(persona.id.clone()))?;
            let trust = system
                .trust(&persona.id, category)
                .ok_or_else(|| SimError::MissingActor(persona.id.clone()))?;
            voters.push(VoterLine {
                actor: persona.id.clone(),
                kind: persona.kind,
                rewards: balance - config.population.starting_balance,
                trust,
                vote: vote.get(),
            });
        }

        let report = RoundReport {
            round,
            poll: poll_id.short().to_string(),
            truth: if truth_is_real {
                PollStatus::Real
            } else {
                PollStatus::Fake
            },
            estimated: poll.status(),
            score: poll.score(),
            voters,
        };
        debug!(
            round,
            poll = %poll_id,
            truth = %report.truth,
            estimated = %report.estimated,
            "round complete"
        );
        rounds.push(report);
    }

    Ok(SimulationReport {
        seed: config.round.seed,
        rounds,
    })
}
