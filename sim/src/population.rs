//! Voter personas.

use crate::config::PopulationConfig;
use factcheck_types::ActorId;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKind {
    Trustworthy,
    LessTrustworthy,
    Malicious,
}

impl PersonaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trustworthy => "honest_trustworthy",
            Self::LessTrustworthy => "honest_less_trustworthy",
            Self::Malicious => "malicious",
        }
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulated voter: who they are and how often they vote the truth.
#[derive(Clone, Debug, PartialEq)]
pub struct Persona {
    pub id: ActorId,
    pub kind: PersonaKind,
    pub accuracy: f64,
}

/// Head counts per persona kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Census {
    pub trustworthy: usize,
    pub less_trustworthy: usize,
    pub malicious: usize,
}

impl Census {
    /// `floor(N·(1−q))` honest, `floor(honest·p)` of them trustworthy,
    /// everyone else malicious.
    pub fn from_config(config: &PopulationConfig) -> Self {
        let n = config.actors;
        let honest = ((n as f64) * (1.0 - config.malicious_ratio)).floor() as usize;
        let honest = honest.min(n);
        let trustworthy = ((honest as f64) * config.trustworthy_ratio).floor() as usize;
        let trustworthy = trustworthy.min(honest);
        Self {
            trustworthy,
            less_trustworthy: honest - trustworthy,
            malicious: n - honest,
        }
    }
}

/// Build the voters: trustworthy first, then less trustworthy, then
/// malicious, each numbered from zero within its kind.
pub fn build_population(config: &PopulationConfig) -> Vec<Persona> {
    let census = Census::from_config(config);
    let groups = [
        (PersonaKind::Trustworthy, census.trustworthy, config.trustworthy_accuracy),
        (
            PersonaKind::LessTrustworthy,
            census.less_trustworthy,
            config.less_trustworthy_accuracy,
        ),
        (PersonaKind::Malicious, census.malicious, config.malicious_accuracy),
    ];
    groups
        .into_iter()
        .flat_map(|(kind, count, accuracy)| {
            (0..count).map(move |i| Persona {
                id: ActorId::new(format!("{kind}_{i}")),
                kind,
                accuracy,
            })
        })
        .collect()
}
