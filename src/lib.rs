//! KidQuest - learning adventures in the terminal
//!
//! A TUI application where a child creates an avatar, plays quizzes,
//! games and stories to earn experience and badges, and a parent checks
//! progress behind a PIN gate. All state lives in memory for one session.

pub mod activities;
pub mod app;
pub mod auth;
pub mod config;
pub mod models;
pub mod progression;
pub mod util;

pub use auth::ValidationError;

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum KidQuestError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// User input rejected by a form or the parent gate
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl From<toml::de::Error> for KidQuestError {
    fn from(err: toml::de::Error) -> Self {
        KidQuestError::Config(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for KidQuest operations
pub type Result<T> = std::result::Result<T, KidQuestError>;

/// Error handling utilities
pub mod error {
    use super::KidQuestError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &KidQuestError) -> String {
        match error {
            KidQuestError::Config(msg) => {
                format!("Configuration error: {}. Check your kidquest.toml.", msg)
            }
            KidQuestError::Tui(_) => {
                "The terminal could not be set up. Try a larger window or another terminal."
                    .to_string()
            }
            KidQuestError::Validation(err) => err.to_string(),
            KidQuestError::Io(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "kidquest";
pub const CONFIG_FILE: &str = "kidquest.toml";
pub const LOG_FILE: &str = "kidquest.log";
pub const DEMO_PIN: &str = "1234";
