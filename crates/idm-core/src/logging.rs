//! Tracing subscriber bootstrap.
//!
//! Binaries call [`init`] once at startup; tests may call it repeatedly since
//! a second installation attempt is reported rather than panicking.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured level.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// ## Errors
///
/// Returns [`Error::Logging`] if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.with_target)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Installs a test-friendly subscriber writing through the test harness.
///
/// Repeated calls are ignored.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("idm_policy=debug,idm_spi=debug"))
        .with_test_writer()
        .try_init();
}
