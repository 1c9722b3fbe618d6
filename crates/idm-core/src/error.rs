//! Error handling for the engine's ambient layer.
//!
//! Rule evaluation failures live in `idm-policy`; this type only covers what
//! can go wrong while bootstrapping configuration and logging.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for configuration and bootstrap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be parsed or holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Returns whether the error was caused by user-supplied configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
