//! Tracing setup. Output goes to a file so it never draws over the terminal UI.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,

    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Returns the log file path: the configured one, or `~/.local/share/strajk/strajk.log`.
pub fn log_path(config: &LogConfig) -> Result<PathBuf, LoggingError> {
    match &config.file {
        Some(path) => Ok(path.clone()),
        None => {
            let data_dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
            Ok(data_dir.join("strajk").join("strajk.log"))
        }
    }
}

/// Installs a global fmt subscriber writing to the log file.
///
/// `RUST_LOG` takes precedence over the configured filter.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &LogConfig) -> Result<PathBuf, LoggingError> {
    let path = log_path(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(path)
}
