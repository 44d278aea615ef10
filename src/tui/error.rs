use crate::api::ApiError;
use crate::logging::LoggingError;
use crate::storage::StorageError;

/// Errors that can occur while starting or running the TUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, runtime setup).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// The log file or subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The HTTP client could not be built.
    #[error("Booking API error: {0}")]
    Api(#[from] ApiError),
}
