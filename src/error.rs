//! Error handling module
//!
//! Application-level error type wrapping domain, configuration and I/O
//! failures, plus the JSON body printed for rejected commands.

use serde::Serialize;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidCommand(_) => "invalid_command",
            AppError::Domain(err) => err.error_code(),
            AppError::Config(_) => "config_error",
            AppError::Output(_) => "output_error",
            AppError::Io(_) => "io_error",
        }
    }

    /// Whether the error is a rejected account operation; processing of
    /// later commands can continue.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Domain(_))
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        }
    }
}

/// Error body printed for a failed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}
