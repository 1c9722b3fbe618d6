//! Password generation command.

use std::sync::Arc;

use idm_model::PasswordPolicy;
use idm_policy::PasswordGenerator;
use idm_spi::RuleRegistry;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::config::OutputFormat;
use crate::output::output;
use crate::CliConfig;

/// A generated password row.
#[derive(Debug, Tabled, Serialize)]
struct GeneratedRow {
    #[tabled(rename = "#")]
    index: u32,
    password: String,
}

/// Runs the generate command.
pub fn run_generate(
    args: GenerateArgs,
    config: &CliConfig,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let policies: Vec<PasswordPolicy> = super::load_policies(&args.policies)?;
    let generator = PasswordGenerator::new(Arc::new(RuleRegistry::with_defaults()))
        .with_config(config.engine.generator.clone());

    let rows = (1..=args.count)
        .map(|index| {
            generator
                .generate(Some(&policies))
                .map(|password| GeneratedRow { index, password })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        policies = policies.len(),
        count = rows.len(),
        "Generated passwords"
    );
    output(&rows, format, |row| row.password.clone())
}
