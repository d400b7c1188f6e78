//! Error handling for the seed grader

use shared::MissingInputError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("{0} (missing {field})", field = .0.field)]
    MissingInput(#[from] MissingInputError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    // Output errors
    #[error("Failed to encode report: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
