//! Game configuration loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who takes the first move (and therefore plays `X`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstMover {
    /// Coin flip before every game.
    #[default]
    Random,
    /// The human always opens.
    Human,
    /// The computer always opens.
    Computer,
}

impl FirstMover {
    /// Resolves to whether the computer moves first in the next game.
    #[instrument(skip(rng))]
    pub fn computer_first(self, rng: &mut impl Rng) -> bool {
        match self {
            Self::Random => rng.gen_bool(0.5),
            Self::Human => false,
            Self::Computer => true,
        }
    }
}

/// Settings for a console session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who opens each game.
    first_mover: FirstMover,

    /// Seed for the computer's moves and the opening coin flip.
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(first_mover: FirstMover, seed: Option<u64>) -> Self {
        Self { first_mover, seed }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_mover = %config.first_mover, seed = ?config.seed, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first_mover: Option<FirstMover>, seed: Option<u64>) -> Self {
        if let Some(first_mover) = first_mover {
            self.first_mover = first_mover;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
