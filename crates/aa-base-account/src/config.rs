//! Configuration for the base account.

use aa_tx_signing::{SignMode, SignModeHandler, DEFAULT_MAX_TX_BYTES};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Privileged module name cannot be empty")]
    EmptyPrivilegedModule,

    #[error("At least one sign mode must be enabled")]
    NoSignModes,

    #[error("Sign mode {0} has no handler and cannot be enabled")]
    UnsupportedSignMode(SignMode),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Base account configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Module allowed to drive `authenticate` and `init`
    pub privileged_module: String,
    /// Sign modes accepted by `authenticate`
    pub sign_modes: Vec<SignMode>,
    /// Upper bound for each decoded transaction part, in bytes
    pub max_tx_bytes: u64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            privileged_module: "accounts".to_string(),
            sign_modes: vec![SignMode::Direct, SignMode::Textual, SignMode::LegacyAminoJson],
            max_tx_bytes: DEFAULT_MAX_TX_BYTES,
        }
    }
}

impl AccountConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AA_PRIVILEGED_MODULE`: privileged module name (default: accounts)
    /// - `AA_SIGN_MODES`: comma-separated modes (default: direct,textual,legacy_amino_json)
    /// - `AA_MAX_TX_BYTES`: decode limit (default: 1048576)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(module) = lookup("AA_PRIVILEGED_MODULE") {
            config.privileged_module = module;
        }

        if let Some(modes) = lookup("AA_SIGN_MODES") {
            config.sign_modes = modes
                .split(',')
                .filter(|m| !m.trim().is_empty())
                .map(|m| {
                    m.parse::<SignMode>().map_err(|_| ConfigError::InvalidValue {
                        key: "AA_SIGN_MODES",
                        value: m.to_string(),
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        if let Some(limit) = lookup("AA_MAX_TX_BYTES") {
            config.max_tx_bytes = limit.parse().map_err(|_| ConfigError::InvalidValue {
                key: "AA_MAX_TX_BYTES",
                value: limit,
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.privileged_module.trim().is_empty() {
            return Err(ConfigError::EmptyPrivilegedModule);
        }

        if self.sign_modes.is_empty() {
            return Err(ConfigError::NoSignModes);
        }

        if let Some(mode) = self
            .sign_modes
            .iter()
            .find(|mode| SignModeHandler::for_mode(**mode).is_none())
        {
            return Err(ConfigError::UnsupportedSignMode(*mode));
        }

        if self.max_tx_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_tx_bytes cannot be 0".into(),
            ));
        }

        Ok(())
    }
}
