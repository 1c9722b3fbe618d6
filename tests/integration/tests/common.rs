//! Common test utilities and fixtures.

use std::sync::Arc;

use idm_policy::PasswordGenerator;
use idm_spi::RuleRegistry;
use rand::rngs::StdRng;

/// Installs test logging once.
pub fn init() {
    idm_core::logging::init_for_tests();
}

/// Registry with the built-in engines.
pub fn registry() -> Arc<RuleRegistry> {
    Arc::new(RuleRegistry::with_defaults())
}

/// Generator over the built-in engines.
pub fn generator() -> PasswordGenerator {
    PasswordGenerator::new(registry())
}

/// Deterministic RNG for reproducible cases.
pub fn rng(seed: u8) -> StdRng {
    idm_crypto::seeded_rng([seed; 32])
}

/// Counts characters of `password` matching `pred`.
pub fn count(password: &str, pred: impl Fn(char) -> bool) -> usize {
    password.chars().filter(|c| pred(*c)).count()
}
