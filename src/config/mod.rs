//! Configuration management module
//!
//! Handles loading, saving, and validation of timing and navigation
//! preferences for the walkthrough UI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{ResearcherError, Result, APP_NAME, CONFIG_FILE};

pub mod persistence;

/// Longest delay any timer may be configured with
const MAX_DELAY_MS: u64 = 10_000;

/// Application configuration loaded from `drresearcher.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fade-out interval before a screen/step change is applied
    pub transition_delay_ms: u64,
    /// Delay between a change and the entry animation
    pub entry_delay_ms: u64,
    /// Delay before the very first entry animation at start-up
    pub initial_entry_delay_ms: u64,
    /// Delay between selecting a mode and opening its destination
    pub selection_delay_ms: u64,
    /// How long a notice stays on screen
    pub notice_duration_ms: u64,
    /// Event loop tick rate
    pub tick_rate_ms: u64,
    /// Where "Back to Walkthrough" lands
    pub return_policy: ReturnPolicy,
    /// Override for the preference store file
    pub storage_path: Option<PathBuf>,
}

/// Step index used when returning from the mode screen to the walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnPolicy {
    /// Keep the step that was last shown
    #[default]
    Resume,
    /// Start again from the first step
    Reset,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: 200,
            entry_delay_ms: 50,
            initial_entry_delay_ms: 100,
            selection_delay_ms: 400,
            notice_duration_ms: 2500,
            tick_rate_ms: 50,
            return_policy: ReturnPolicy::Resume,
            storage_path: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_delay_ms)
    }

    pub fn initial_entry_delay(&self) -> Duration {
        Duration::from_millis(self.initial_entry_delay_ms)
    }

    pub fn selection_delay(&self) -> Duration {
        Duration::from_millis(self.selection_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the return policy
    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = policy;
        self
    }

    /// Set the preference store location
    pub fn with_storage_path(mut self, path: PathBuf) -> Self {
        self.storage_path = Some(path);
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ResearcherError::ConfigError(
                "Tick rate must be greater than 0".to_string(),
            ));
        }

        if self.transition_delay_ms == 0 {
            return Err(ResearcherError::ConfigError(
                "Transition delay must be greater than 0".to_string(),
            ));
        }

        let delays = [
            ("transition_delay_ms", self.transition_delay_ms),
            ("entry_delay_ms", self.entry_delay_ms),
            ("initial_entry_delay_ms", self.initial_entry_delay_ms),
            ("selection_delay_ms", self.selection_delay_ms),
            ("notice_duration_ms", self.notice_duration_ms),
            ("tick_rate_ms", self.tick_rate_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ResearcherError::ConfigError(format!(
                    "{} too long: {}ms (max: {}ms)",
                    name, value, MAX_DELAY_MS
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    ///
    /// Falls back to defaults when the platform has no config directory.
    pub fn load() -> Result<Self> {
        Self::load_in(dirs::config_dir().as_deref())
    }

    fn load_in(config_dir: Option<&Path>) -> Result<Self> {
        match config_dir {
            Some(dir) => Self::load_from(&dir.join(APP_NAME).join(CONFIG_FILE)),
            None => {
                tracing::warn!("no config directory, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`, returning defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ResearcherError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ResearcherError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ResearcherError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            ResearcherError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/drresearcher/drresearcher.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ResearcherError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
