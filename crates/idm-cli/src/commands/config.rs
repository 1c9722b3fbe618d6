//! Configuration management commands.

use crate::cli::ConfigCommand;
use crate::output::{info, success, warning};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => set_config(config, &key, &value),
        ConfigCommand::Init { force } => init_config(config, force),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    if !config_path.exists() {
        warning("File does not exist; showing defaults.");
    }
    println!();
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Sets a configuration value.
fn set_config(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    config.set(key, value)?;
    config.save()?;
    success(&format!("Set {key} = {value}"));
    Ok(())
}

/// Writes the current configuration to the configuration file.
fn init_config(config: &CliConfig, force: bool) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    if config_path.exists() && !force {
        return Err(crate::CliError::Config(format!(
            "{} already exists; pass --force to overwrite",
            config_path.display()
        )));
    }

    config.save()?;
    success(&format!("Configuration saved to: {}", config_path.display()));
    Ok(())
}
