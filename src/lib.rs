//! CHARADAS - party word-guessing game
//!
//! Pick a category, survive the countdown, then guess as many words as
//! possible before the clock runs out. The game core (word bank, round
//! timer, session and screen controller) is synchronous and UI-agnostic;
//! the `app` module wraps it in a terminal interface.

use std::fmt;

pub mod app;
pub mod config;
pub mod game;
pub mod models;

// Common error types
#[derive(Debug)]
pub enum CharadasError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Session snapshot could not be saved or restored
    PersistenceError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for CharadasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharadasError::IoError(err) => write!(f, "I/O error: {}", err),
            CharadasError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CharadasError::PersistenceError(msg) => write!(f, "Session persistence error: {}", msg),
            CharadasError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for CharadasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CharadasError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CharadasError {
    fn from(err: std::io::Error) -> Self {
        CharadasError::IoError(err)
    }
}

impl From<serde_json::Error> for CharadasError {
    fn from(err: serde_json::Error) -> Self {
        CharadasError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for CharadasError {
    fn from(err: toml::de::Error) -> Self {
        CharadasError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CharadasError {
    fn from(err: toml::ser::Error) -> Self {
        CharadasError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for CHARADAS operations
pub type Result<T> = std::result::Result<T, CharadasError>;

/// Error handling utilities
pub mod error {
    use super::CharadasError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &CharadasError) -> String {
        match error {
            CharadasError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            CharadasError::PersistenceError(_) => {
                "Failed to save or restore the game session. Check disk space and permissions."
                    .to_string()
            }
            CharadasError::TuiError(_) => {
                "The terminal could not be initialised. Try a different terminal emulator."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "charadas";
pub const CONFIG_FILE: &str = "charadas.toml";
pub const SESSION_FILE: &str = "session.json";
pub const LOG_FILE: &str = "charadas.log";

/// Shortest allowed round, in seconds
pub const MIN_ROUND_SECONDS: u32 = 30;
/// Longest allowed round, in seconds
pub const MAX_ROUND_SECONDS: u32 = 60;
/// Ticks shown before a round starts
pub const COUNTDOWN_SECONDS: u32 = 3;
