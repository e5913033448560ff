//! Dr.researcher - onboarding walkthrough and research mode launcher
//!
//! A terminal UI that walks new users through a short introduction and then
//! lets them pick a research mode, which opens in the system browser.

use std::fmt;

pub mod app;
pub mod config;
pub mod models;
pub mod telemetry;

// Common error types
#[derive(Debug)]
pub enum ResearcherError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Preference storage could not be read or written
    StorageError(String),
    /// External destination could not be opened
    LaunchError(String),
    /// Logging could not be set up
    TelemetryError(String),
}

impl fmt::Display for ResearcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearcherError::IoError(err) => write!(f, "I/O error: {}", err),
            ResearcherError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ResearcherError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            ResearcherError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            ResearcherError::LaunchError(msg) => write!(f, "Launch error: {}", msg),
            ResearcherError::TelemetryError(msg) => write!(f, "Telemetry error: {}", msg),
        }
    }
}

impl std::error::Error for ResearcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResearcherError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResearcherError {
    fn from(err: std::io::Error) -> Self {
        ResearcherError::IoError(err)
    }
}

impl From<serde_json::Error> for ResearcherError {
    fn from(err: serde_json::Error) -> Self {
        ResearcherError::StorageError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for ResearcherError {
    fn from(err: toml::de::Error) -> Self {
        ResearcherError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for ResearcherError {
    fn from(err: toml::ser::Error) -> Self {
        ResearcherError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, ResearcherError>;

/// Error handling utilities
pub mod error {
    use super::ResearcherError;

    /// Convert error to a short message suitable for an on-screen notice
    pub fn user_friendly_message(error: &ResearcherError) -> String {
        match error {
            ResearcherError::LaunchError(target) => {
                format!("Could not open {}. Check that a browser is available.", target)
            }
            ResearcherError::StorageError(_) => {
                "Preferences could not be saved. Your choice applies to this session only."
                    .to_string()
            }
            ResearcherError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            ResearcherError::TuiError(_) => {
                "Terminal could not be initialised. Try a different terminal emulator.".to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Whether the application can keep running after this error
    pub fn is_recoverable(error: &ResearcherError) -> bool {
        matches!(
            error,
            ResearcherError::LaunchError(_)
                | ResearcherError::StorageError(_)
                | ResearcherError::TelemetryError(_)
        )
    }
}

// Common types and constants
pub const APP_NAME: &str = "drresearcher";
pub const CONFIG_FILE: &str = "drresearcher.toml";
pub const STORAGE_FILE: &str = "storage.json";
pub const LOG_FILE: &str = "drresearcher.log";
pub const LOG_ENV: &str = "DRRESEARCHER_LOG";
