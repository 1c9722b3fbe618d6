//! # idm-policy
//!
//! Command-line tool for password and account policies.

#![forbid(unsafe_code)]
#![deny(warnings)]

use clap::Parser;
use idm_cli::{
    cli::{Cli, Command},
    commands::{run_check_account, run_config, run_generate, run_merge},
    config::CliConfig,
    output::{error, warning},
};

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };
    if let Some(path) = &cli.config {
        match idm_core::Config::load(path) {
            Ok(engine) => config.engine = engine,
            Err(e) => {
                error(&format!("Failed to load {}: {e}", path.display()));
                std::process::exit(1);
            }
        }
    }

    let mut logging = config.engine.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Err(e) = idm_core::logging::init(&logging) {
        warning(&e.to_string());
    }

    let format = cli.output.unwrap_or(config.output_format);

    // Execute command
    let result = match cli.command {
        Command::Generate(args) => run_generate(args, &config, format),
        Command::Merge(args) => run_merge(args, format),
        Command::CheckAccount(args) => run_check_account(args, format),
        Command::Config(cmd) => run_config(cmd, &mut config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
