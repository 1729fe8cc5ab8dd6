//! Configuration management module
//!
//! Loads and validates application settings from the user's config
//! directory. The child profile itself is never written to disk.

use crate::models::controls::{DAILY_LIMIT_STEP, MAX_DAILY_LIMIT, MIN_DAILY_LIMIT};
use crate::models::ParentalControls;
use crate::{KidQuestError, Result, APP_NAME, CONFIG_FILE, DEMO_PIN, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Four-digit PIN that unlocks the parent dashboard
    pub parent_pin: String,
    /// Event poll interval for the TUI loop
    pub tick_rate_ms: u64,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Starting daily screen-time limit
    pub daily_limit_minutes: u32,
    /// Starting safe mode switch
    pub safe_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            parent_pin: DEMO_PIN.to_string(),
            tick_rate_ms: 250,
            log_filter: "info".to_string(),
            daily_limit_minutes: 60,
            safe_mode: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.parent_pin.len() != 4 || !self.parent_pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(KidQuestError::Config(
                "Parent PIN must be exactly 4 digits".to_string(),
            ));
        }

        const MIN_TICK_MS: u64 = 16;
        const MAX_TICK_MS: u64 = 1000;
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_rate_ms) {
            return Err(KidQuestError::Config(format!(
                "Tick rate must be between {} and {} ms",
                MIN_TICK_MS, MAX_TICK_MS
            )));
        }

        if !(MIN_DAILY_LIMIT..=MAX_DAILY_LIMIT).contains(&self.daily_limit_minutes)
            || self.daily_limit_minutes % DAILY_LIMIT_STEP != 0
        {
            return Err(KidQuestError::Config(format!(
                "Daily limit must be a multiple of {} between {} and {} minutes",
                DAILY_LIMIT_STEP, MIN_DAILY_LIMIT, MAX_DAILY_LIMIT
            )));
        }

        if self.log_filter.trim().is_empty() {
            return Err(KidQuestError::Config("Log filter must not be empty".to_string()));
        }

        Ok(())
    }

    pub fn with_parent_pin(mut self, pin: &str) -> Self {
        self.parent_pin = pin.to_string();
        self
    }

    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms;
        self
    }

    pub fn with_daily_limit(mut self, minutes: u32) -> Self {
        self.daily_limit_minutes = minutes;
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Parental controls seeded from the configured defaults
    pub fn parental_controls(&self) -> ParentalControls {
        let mut controls = ParentalControls::default();
        controls.screen_time.daily_limit_minutes = self.daily_limit_minutes;
        controls.safety.safe_mode = self.safe_mode;
        controls
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            KidQuestError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            KidQuestError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Uses $CONFIG_HOME/kidquest/kidquest.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            KidQuestError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Uses $DATA_HOME/kidquest/kidquest.log
    pub fn log_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            KidQuestError::Config("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parent_pin, "1234");
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_pin_rejected() {
        for pin in ["123", "12345", "12a4", ""] {
            let config = AppConfig::default().with_parent_pin(pin);
            assert!(config.validate().is_err(), "pin {:?} should be rejected", pin);
        }
    }

    #[test]
    fn test_invalid_limits_rejected() {
        assert!(AppConfig::default().with_tick_rate_ms(5).validate().is_err());
        assert!(AppConfig::default().with_daily_limit(200).validate().is_err());
        assert!(AppConfig::default().with_daily_limit(50).validate().is_err());
        assert!(AppConfig::default().with_daily_limit(45).validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("parent_pin = \"4321\"").unwrap();
        assert_eq!(config.parent_pin, "4321");
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.safe_mode);
    }

    #[test]
    fn test_parental_controls_seeded() {
        let mut config = AppConfig::default().with_daily_limit(90);
        config.safe_mode = false;
        let controls = config.parental_controls();
        assert_eq!(controls.screen_time.daily_limit_minutes, 90);
        assert!(!controls.safety.safe_mode);
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("kidquest"));
        assert!(path.to_string_lossy().ends_with("kidquest.toml"));
    }
}
