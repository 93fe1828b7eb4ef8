//! Table configuration loaded from TOML.

use crate::autofill::DEFAULT_FILL_STEP;
use crate::wager::{DEFAULT_BALANCE, DEFAULT_PAYOUT_MULTIPLIER};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a table: starting points, payout and auto-fill pacing.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TableConfig {
    /// Points the wager starts with.
    #[serde(default = "default_starting_balance")]
    starting_balance: i64,

    /// Multiplier applied to a winning stake.
    #[serde(default = "default_payout_multiplier")]
    payout_multiplier: i64,

    /// Milliseconds between consecutive auto-fill moves.
    #[serde(default = "default_fill_step_ms")]
    fill_step_ms: u64,

    /// Fixed seed for the auto-fill shuffle; random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_starting_balance() -> i64 {
    DEFAULT_BALANCE
}

fn default_payout_multiplier() -> i64 {
    DEFAULT_PAYOUT_MULTIPLIER
}

fn default_fill_step_ms() -> u64 {
    DEFAULT_FILL_STEP.as_millis() as u64
}

impl TableConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.payout_multiplier < 0 {
            return Err(ConfigError::new(format!(
                "payout_multiplier must not be negative (got {})",
                config.payout_multiplier
            )));
        }
        Ok(config)
    }

    /// Delay between consecutive auto-fill moves.
    pub fn fill_step(&self) -> Duration {
        Duration::from_millis(self.fill_step_ms)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            payout_multiplier: default_payout_multiplier(),
            fill_step_ms: default_fill_step_ms(),
            seed: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
