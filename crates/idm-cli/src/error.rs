//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine configuration or logging error.
    #[error(transparent)]
    Core(#[from] idm_core::Error),

    /// Policy file could not be loaded.
    #[error("cannot load policy file {}: {reason}", .path.display())]
    PolicyFile {
        /// File path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Policy engine error, including account policy violations.
    #[error(transparent)]
    Policy(#[from] idm_policy::PolicyError),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
