use crate::core::models::softcore::{SasaModel, SoftcoreParameters};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings of the softcore generalized Born replacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GbConfig {
    pub sasa_model: SasaModel,
    /// Radius offset in nm.
    pub offset: f64,
}

impl Default for GbConfig {
    fn default() -> Self {
        Self {
            sasa_model: SasaModel::Ace,
            offset: 0.009,
        }
    }
}

/// Tunables of the alchemical factory. Every field has a default, so an empty
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FactoryConfig {
    pub softcore: SoftcoreParameters,
    pub gb: GbConfig,
    /// Names of opaque force kinds that are copied into every intermediate unmodified.
    pub pass_through_kinds: Vec<String>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            softcore: SoftcoreParameters::default(),
            gb: GbConfig::default(),
            pass_through_kinds: vec![
                "MonteCarloBarostat".to_string(),
                "AndersenThermostat".to_string(),
            ],
        }
    }
}

impl FactoryConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let SoftcoreParameters { alpha, a, b, c } = self.softcore;
        for (name, value) in [
            ("softcore.alpha", alpha),
            ("softcore.a", a),
            ("softcore.b", b),
            ("softcore.c", c),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("must be a positive finite number, got {value}"),
                });
            }
        }

        let offset = self.gb.offset;
        if !(offset.is_finite() && offset >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "gb.offset",
                reason: format!("must be a non-negative finite length, got {offset}"),
            });
        }

        if let Some(empty) = self.pass_through_kinds.iter().position(|k| k.trim().is_empty()) {
            return Err(ConfigError::InvalidParameter {
                name: "pass-through-kinds",
                reason: format!("entry {empty} is empty"),
            });
        }
        Ok(())
    }

    pub fn passes_through(&self, kind: &str) -> bool {
        self.pass_through_kinds.iter().any(|k| k == kind)
    }
}

impl std::str::FromStr for FactoryConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: FactoryConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
