//! Configuration management module
//!
//! Handles loading, saving, and validation of game settings.

use crate::{CharadasError, Result, APP_NAME, CONFIG_FILE, COUNTDOWN_SECONDS, LOG_FILE};
use crate::{MAX_ROUND_SECONDS, MIN_ROUND_SECONDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod persistence;

/// Game settings read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of a round in seconds (30 to 60)
    pub round_duration_seconds: u32,
    /// Countdown shown before each round
    pub countdown_seconds: u32,
    /// How often the UI polls for input and redraws (milliseconds)
    pub tick_rate_ms: u64,
    /// Restore high score and screen from the last run
    pub restore_session: bool,
    /// Where to write the log; defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_seconds: MAX_ROUND_SECONDS,
            countdown_seconds: COUNTDOWN_SECONDS,
            tick_rate_ms: 250,
            restore_session: true,
            log_file: None,
        }
    }
}

/// Clamp a requested round length into the allowed range
pub fn clamp_round_duration(seconds: i64) -> u32 {
    seconds.clamp(i64::from(MIN_ROUND_SECONDS), i64::from(MAX_ROUND_SECONDS)) as u32
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round length, clamped into range
    pub fn with_round_duration(mut self, seconds: i64) -> Self {
        self.round_duration_seconds = clamp_round_duration(seconds);
        self
    }

    /// Set the countdown length
    pub fn with_countdown(mut self, seconds: u32) -> Self {
        self.countdown_seconds = seconds;
        self
    }

    /// Set the log file location
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// UI poll interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ROUND_SECONDS..=MAX_ROUND_SECONDS).contains(&self.round_duration_seconds) {
            return Err(CharadasError::ConfigError(format!(
                "Round duration must be between {} and {} seconds (got {})",
                MIN_ROUND_SECONDS, MAX_ROUND_SECONDS, self.round_duration_seconds
            )));
        }

        const MAX_COUNTDOWN: u32 = 10;
        if self.countdown_seconds == 0 || self.countdown_seconds > MAX_COUNTDOWN {
            return Err(CharadasError::ConfigError(format!(
                "Countdown must be between 1 and {} seconds (got {})",
                MAX_COUNTDOWN, self.countdown_seconds
            )));
        }

        const MIN_TICK_MS: u64 = 50;
        const MAX_TICK_MS: u64 = 1000;
        if self.tick_rate_ms < MIN_TICK_MS || self.tick_rate_ms > MAX_TICK_MS {
            return Err(CharadasError::ConfigError(format!(
                "Tick rate must be between {} and {} ms (got {})",
                MIN_TICK_MS, MAX_TICK_MS, self.tick_rate_ms
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            CharadasError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            CharadasError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let requested = config.round_duration_seconds;
        config.round_duration_seconds = clamp_round_duration(i64::from(requested));
        if config.round_duration_seconds != requested {
            tracing::warn!(
                requested,
                clamped = config.round_duration_seconds,
                "round duration out of range"
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CharadasError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            CharadasError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Log destination: the configured override, or the data directory
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().ok_or_else(|| {
            CharadasError::ConfigError("Unable to determine data directory".to_string())
        })?;
        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/charadas/charadas.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            CharadasError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
