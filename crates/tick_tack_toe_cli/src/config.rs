//! Configuration for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who places the first mark of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstMover {
    /// Pick at random.
    #[default]
    Random,
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl FirstMover {
    /// Resolves to whether the opponent opens, drawing from `rng` when random.
    pub fn opponent_starts<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            FirstMover::Random => rng.random_bool(0.5),
            FirstMover::Player => false,
            FirstMover::Opponent => true,
        }
    }
}

/// Settings for the terminal game.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Who moves first in the opening game.
    #[serde(default)]
    first_mover: FirstMover,

    /// Seed for the opponent's tie-breaks.
    #[serde(default)]
    seed: Option<u64>,

    /// Glyph drawn for the human player's marks.
    #[serde(default = "default_player_glyph")]
    player_glyph: String,

    /// Glyph drawn for the opponent's marks.
    #[serde(default = "default_opponent_glyph")]
    opponent_glyph: String,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File to write logs to instead of stderr.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

fn default_player_glyph() -> String {
    "✕".to_string()
}

fn default_opponent_glyph() -> String {
    "◯".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::default(),
            seed: None,
            player_glyph: default_player_glyph(),
            opponent_glyph: default_opponent_glyph(),
            log_filter: default_log_filter(),
            log_file: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with command-line values taking precedence.
    pub fn with_overrides(mut self, seed: Option<u64>, first_mover: Option<FirstMover>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(first_mover) = first_mover {
            self.first_mover = first_mover;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_glyph.trim().is_empty() || self.opponent_glyph.trim().is_empty() {
            return Err(ConfigError::new("Glyphs must not be blank".to_string()));
        }
        if self.player_glyph == self.opponent_glyph {
            return Err(ConfigError::new(
                "Player and opponent glyphs must differ".to_string(),
            ));
        }
        Ok(())
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
