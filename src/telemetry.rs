//! Logging setup
//!
//! The terminal is owned by the UI, so events go to a log file under the
//! platform data directory instead of stdout.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::{ResearcherError, Result, APP_NAME, LOG_ENV, LOG_FILE};

/// Default log file location: $DATA_HOME/drresearcher/drresearcher.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        ResearcherError::TelemetryError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the event filter from `DRRESEARCHER_LOG`, falling back to `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber writing plain-text events to `path`
pub fn init_telemetry(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ResearcherError::TelemetryError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ResearcherError::TelemetryError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ResearcherError::TelemetryError(e.to_string()))?;

    tracing::info!(log_file = %path.display(), "telemetry initialized");
    Ok(())
}
