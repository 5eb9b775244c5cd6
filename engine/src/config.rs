//! Engine configuration with TOML file support.

use factcheck_types::{MechanismParams, PollTerms, TypesError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] TypesError),
}

/// Configuration for a [`crate::FactCheckSystem`].
///
/// Can be loaded from a TOML file via [`EngineConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Missing tables and keys fall
/// back to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine-wide mechanism tunables.
    #[serde(default)]
    pub params: MechanismParams,

    /// Terms used by [`crate::FactCheckSystem::open_default_poll`].
    #[serde(default)]
    pub default_terms: PollTerms,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string. The parsed values are
    /// validated before they are returned.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the mechanism tunables and the default poll terms.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        self.default_terms.validate()?;
        Ok(())
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcheck_types::{NegativeConfidencePolicy, ZeroWeightPolicy};
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml_string().expect("serializable");
        let parsed = EngineConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.params.trust_multiplier, 5.0);
        assert_eq!(config.params.default_balance, 10_000.0);
        assert_eq!(config.default_terms.max_votes, 50);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            [params]
            default_trust = 40.0
            negative_confidence = "reject"

            [default_terms]
            max_votes = 7
        "#;
        let config = EngineConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.params.default_trust, 40.0);
        assert_eq!(
            config.params.negative_confidence,
            NegativeConfidencePolicy::Reject
        );
        assert_eq!(config.params.zero_weight, ZeroWeightPolicy::HoldPrevious);
        assert_eq!(config.default_terms.max_votes, 7);
        assert_eq!(config.default_terms.registration_fee, 10.0);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let result = EngineConfig::from_toml_str("[params]\nzero_weight = \"guess\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn nan_trust_multiplier_is_rejected() {
        let result = EngineConfig::from_toml_str("[params]\ntrust_multiplier = nan\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TypesError::InvalidParam {
                field: "trust_multiplier",
                ..
            }))
        ));
    }

    #[test]
    fn out_of_range_default_trust_is_rejected() {
        let result = EngineConfig::from_toml_str("[params]\ndefault_trust = 150.0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TypesError::InvalidParam {
                field: "default_trust",
                ..
            }))
        ));
    }

    #[test]
    fn invalid_default_terms_are_rejected() {
        let result = EngineConfig::from_toml_str("[default_terms]\nmax_votes = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(TypesError::ZeroQuota))));

        let result = EngineConfig::from_toml_str("[default_terms]\nmax_reward = inf\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TypesError::InvalidTerm { .. }))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[default_terms]\nmax_reward = 250.0").expect("write");
        let config = EngineConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.default_terms.max_reward, 250.0);
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = EngineConfig::from_toml_file("/nonexistent/factcheck.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
