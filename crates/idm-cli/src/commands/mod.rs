//! Command implementations.

pub mod account;
pub mod config;
pub mod generate;
pub mod merge;

pub use account::run_check_account;
pub use config::run_config;
pub use generate::run_generate;
pub use merge::run_merge;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::CliError;

/// Loads a policy from a JSON or TOML file, chosen by extension.
///
/// ## Errors
///
/// Returns [`CliError::PolicyFile`] if the file cannot be read, has another
/// extension or does not hold a policy.
pub fn load_policy<T: DeserializeOwned>(path: &Path) -> crate::CliResult<T> {
    let failure = |reason: String| CliError::PolicyFile {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| failure(e.to_string()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let policy = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| failure(e.to_string()))?,
        Some("toml") => toml::from_str(&content).map_err(|e| failure(e.to_string()))?,
        _ => return Err(failure("expected a .json or .toml file".to_string())),
    };

    debug!(path = %path.display(), "Loaded policy file");
    Ok(policy)
}

/// Loads every policy file, in order.
///
/// ## Errors
///
/// Returns the first load failure.
pub fn load_policies<T: DeserializeOwned>(paths: &[impl AsRef<Path>]) -> crate::CliResult<Vec<T>> {
    paths.iter().map(|p| load_policy(p.as_ref())).collect()
}
