//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Password and account policy tool.
#[derive(Debug, Parser)]
#[command(name = "idm-policy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Engine configuration file (overrides the CLI configuration).
    #[arg(short, long, env = "IDM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the CLI configuration).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate passwords satisfying password policies.
    Generate(GenerateArgs),

    /// Show the effective password rule of password policies.
    Merge(MergeArgs),

    /// Check a username against account policies.
    CheckAccount(CheckAccountArgs),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments of `generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Password policy files (JSON or TOML). None yields default passwords.
    pub policies: Vec<PathBuf>,

    /// Number of passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,
}

/// Arguments of `merge`.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Password policy files (JSON or TOML).
    pub policies: Vec<PathBuf>,
}

/// Arguments of `check-account`.
#[derive(Debug, Args)]
pub struct CheckAccountArgs {
    /// Account policy files (JSON or TOML).
    #[arg(required = true)]
    pub policies: Vec<PathBuf>,

    /// Username to check.
    #[arg(short, long)]
    pub username: String,

    /// Identity attribute as `schema=value`; repeatable.
    #[arg(long = "attr", value_name = "SCHEMA=VALUE", value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Write the configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Parses a `schema=value` pair.
///
/// ## Errors
///
/// Returns a message if there is no `=` or the schema is empty.
pub fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((schema, value)) if !schema.trim().is_empty() => {
            Ok((schema.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected SCHEMA=VALUE, got {raw:?}")),
    }
}
