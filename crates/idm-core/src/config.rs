//! Configuration management for the policy engine.
//!
//! Configuration is read from a TOML document and then overlaid with
//! environment variables. Every section has sensible defaults so an empty
//! document is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding [`LoggingConfig::level`].
pub const ENV_LOG_LEVEL: &str = "IDM_LOG_LEVEL";

/// Environment variable overriding [`GeneratorConfig::max_attempts`].
pub const ENV_MAX_ATTEMPTS: &str = "IDM_GENERATOR_MAX_ATTEMPTS";

/// Main configuration structure for the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Password generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Password generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound on candidate passwords composed for a single request.
    ///
    /// A candidate is re-rolled when it breaks a post-composition rule
    /// (repeated characters, forbidden words).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Whether to include the event target in formatted output.
    #[serde(default)]
    pub with_target: bool,
}

fn default_max_attempts() -> u32 {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            with_target: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets the maximum number of composition attempts.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

impl Config {
    /// Parses configuration from a TOML document and validates it.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Config`] if the document is malformed or a value is
    /// out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file, falling back to defaults when the
    /// file does not exist, then applies environment overrides.
    ///
    /// ## Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if an environment override is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            debug!(path = %path.display(), "Loading configuration");
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)?
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Self::default()
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`.
    ///
    /// `lookup` is normally `std::env::var`; tests pass a closure over a map.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Config`] if an override cannot be parsed.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            debug!(variable = ENV_LOG_LEVEL, level = %level, "Overriding log level");
            self.logging.level = level;
        }

        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            self.generator.max_attempts = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_MAX_ATTEMPTS} must be a positive integer, got {raw:?}"))
            })?;
            debug!(
                variable = ENV_MAX_ATTEMPTS,
                max_attempts = self.generator.max_attempts,
                "Overriding generator attempts"
            );
        }

        self.validate()?;
        Ok(self)
    }

    /// Serializes the configuration back to TOML.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))
    }

    fn validate(&self) -> Result<()> {
        if self.generator.max_attempts == 0 {
            return Err(Error::Config(
                "generator.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}
