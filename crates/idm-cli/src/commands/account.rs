//! Account check command.

use idm_model::{AccountPolicy, UserSnapshot};
use idm_policy::enforce_account_policies;
use idm_spi::RuleRegistry;
use tracing::info;

use crate::cli::CheckAccountArgs;
use crate::config::OutputFormat;
use crate::output::success;

/// Runs the check-account command.
///
/// A violation is returned as an error so the process exits non-zero.
pub fn run_check_account(args: CheckAccountArgs, format: OutputFormat) -> crate::CliResult<()> {
    let policies: Vec<AccountPolicy> = super::load_policies(&args.policies)?;
    let identity = args
        .attributes
        .into_iter()
        .fold(UserSnapshot::new(&args.username), |user, (schema, value)| {
            user.with_attribute(schema, value)
        });

    enforce_account_policies(&RuleRegistry::with_defaults(), Some(&policies), &identity)?;
    info!(policies = policies.len(), "Username accepted");

    match format {
        OutputFormat::Table => success(&format!(
            "Username {:?} satisfies {} account {}",
            identity.username,
            policies.len(),
            if policies.len() == 1 { "policy" } else { "policies" }
        )),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "username": identity.username, "valid": true })
        ),
        OutputFormat::Quiet => {}
    }
    Ok(())
}
