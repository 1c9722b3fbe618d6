//! CLI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// CLI configuration.
///
/// Stored as TOML in `~/.idm/idm.toml`. The engine sections
/// (`[generator]`, `[logging]`) sit next to the CLI's own keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Engine configuration.
    #[serde(flatten)]
    pub engine: idm_core::Config,
}

impl CliConfig {
    /// Loads configuration from file, then applies environment overrides.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)?
        } else {
            Self::default()
        };

        Ok(Self {
            engine: config
                .engine
                .with_env_overrides(|key| std::env::var(key).ok())?,
            ..config
        })
    }

    /// Parses configuration from TOML.
    pub fn from_toml_str(content: &str) -> crate::CliResult<Self> {
        toml::from_str(content)
            .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))
    }

    /// Serializes configuration to TOML.
    pub fn to_toml_string(&self) -> crate::CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".idm").join("idm.toml"))
    }

    /// Sets a value by key.
    pub fn set(&mut self, key: &str, value: &str) -> crate::CliResult<()> {
        match key {
            "output_format" | "output" => {
                self.output_format = OutputFormat::parse(value).ok_or_else(|| {
                    crate::CliError::InvalidArgument(format!(
                        "unknown output format: {value}. Supported: table, json, quiet"
                    ))
                })?;
            }
            "generator.max_attempts" | "max_attempts" => {
                let attempts: u32 = value.parse().map_err(|_| {
                    crate::CliError::InvalidArgument(format!(
                        "max_attempts must be a positive integer, got {value}"
                    ))
                })?;
                if attempts == 0 {
                    return Err(crate::CliError::InvalidArgument(
                        "max_attempts must be at least 1".to_string(),
                    ));
                }
                self.engine.generator.max_attempts = attempts;
            }
            "logging.level" | "log_level" => {
                if value.trim().is_empty() {
                    return Err(crate::CliError::InvalidArgument(
                        "log level must not be empty".to_string(),
                    ));
                }
                self.engine.logging.level = value.to_string();
            }
            "logging.with_target" => {
                self.engine.logging.with_target = value.parse().map_err(|_| {
                    crate::CliError::InvalidArgument(format!("expected true or false, got {value}"))
                })?;
            }
            _ => {
                return Err(crate::CliError::InvalidArgument(format!(
                    "unknown configuration key: {key}. Known keys: output_format, \
                     generator.max_attempts, logging.level, logging.with_target"
                )));
            }
        }
        Ok(())
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// Bare values, one per line.
    Quiet,
}

impl OutputFormat {
    /// Parses a format name, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "quiet" => Some(Self::Quiet),
            _ => None,
        }
    }
}
