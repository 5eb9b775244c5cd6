//! Simulation configuration with TOML file support.

use factcheck_engine::{ConfigError, EngineConfig};
use factcheck_types::{Category, Credits};
use factcheck_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("population must contain at least one actor")]
    EmptyPopulation,

    #[error(transparent)]
    Engine(#[from] ConfigError),
}

/// Who votes and how reliably.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of voting actors (the simulator account is extra).
    pub actors: usize,
    /// Share of honest actors that are trustworthy.
    pub trustworthy_ratio: f64,
    /// Share of all actors that are malicious.
    pub malicious_ratio: f64,
    pub starting_balance: Credits,
    pub trustworthy_accuracy: f64,
    pub less_trustworthy_accuracy: f64,
    pub malicious_accuracy: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            actors: 10,
            trustworthy_ratio: 0.7,
            malicious_ratio: 0.3,
            starting_balance: 1.0,
            trustworthy_accuracy: 0.9,
            less_trustworthy_accuracy: 0.7,
            malicious_accuracy: 0.0,
        }
    }
}

/// How each round's poll is opened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub rounds: u32,
    pub seed: u64,
    pub category: Category,
    pub max_reward: Credits,
    /// Balance of the account that opens and funds every poll.
    pub simulator_balance: Credits,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            seed: 29,
            category: Category::Politics,
            max_reward: 10.0,
            simulator_balance: 1e10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Human,
        }
    }
}

/// Full configuration of a simulation run.
///
/// Every section is optional in the TOML file; CLI flags override file
/// values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub engine: EngineConfig,
    pub population: PopulationConfig,
    pub round: RoundConfig,
    pub logging: LoggingConfig,
}

impl SimConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SimConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SimConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, SimConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, SimConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the engine section, that ratios and accuracies are
    /// probabilities, and that someone votes.
    pub fn validate(&self) -> Result<(), SimConfigError> {
        self.engine.validate()?;
        let p = &self.population;
        if p.actors == 0 {
            return Err(SimConfigError::EmptyPopulation);
        }
        let probabilities = [
            ("trustworthy_ratio", p.trustworthy_ratio),
            ("malicious_ratio", p.malicious_ratio),
            ("trustworthy_accuracy", p.trustworthy_accuracy),
            ("less_trustworthy_accuracy", p.less_trustworthy_accuracy),
            ("malicious_accuracy", p.malicious_accuracy),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimConfigError::OutOfUnitRange { field, value });
            }
        }
        Ok(())
    }
}
