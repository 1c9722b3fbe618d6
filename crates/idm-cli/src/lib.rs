//! # idm-cli
//!
//! Command-line tools for the identity policy engine.
//!
//! This crate provides command-line utilities for:
//! - Password generation from password policy files
//! - Inspecting the effective (merged) password rule
//! - Checking usernames against account policy files
//! - Managing the CLI configuration file

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
