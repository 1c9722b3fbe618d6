//! The rule source consumed by the policy engine.

use std::fmt::Debug;

use idm_model::{AccountPolicy, DefaultPasswordRuleConf, Implementation, PasswordPolicy, RuleConf};
use tracing::{debug, warn};

use crate::factory::RuleError;

/// Resolves stored rule implementations into configurations.
///
/// Implementors only provide [`resolve`](RuleSource::resolve). The policy
/// helpers apply the skip-on-failure contract: an implementation that cannot
/// be resolved is logged and ignored, never fatal.
pub trait RuleSource: Send + Sync + Debug {
    /// Resolves a single implementation.
    ///
    /// ## Errors
    ///
    /// Returns a [`RuleError`] if the engine is unknown, the body is
    /// malformed or the body configures a different kind than declared.
    fn resolve(&self, implementation: &Implementation) -> Result<RuleConf, RuleError>;

    /// Resolves every password rule configuration of a policy, in order.
    ///
    /// Implementations that fail to resolve or that configure something other
    /// than a password rule are skipped.
    fn resolve_password_rules(&self, policy: &PasswordPolicy) -> Vec<DefaultPasswordRuleConf> {
        policy
            .rules
            .iter()
            .filter_map(|rule| match self.resolve(rule) {
                Ok(RuleConf::DefaultPasswordRule(conf)) => Some(conf),
                Ok(other) => {
                    debug!(
                        policy = %policy.name,
                        key = %rule.key,
                        kind = %other.implementation_type(),
                        "Skipping non-password rule"
                    );
                    None
                }
                Err(e) => {
                    warn!(policy = %policy.name, key = %rule.key, error = %e, "Skipping unresolvable rule");
                    None
                }
            })
            .collect()
    }

    /// Resolves every rule configuration of an account policy, in order.
    ///
    /// Implementations that fail to resolve are skipped. Kinds are not
    /// filtered; the evaluator rejects the ones it cannot enforce.
    fn resolve_account_rules(&self, policy: &AccountPolicy) -> Vec<RuleConf> {
        policy
            .rules
            .iter()
            .filter_map(|rule| match self.resolve(rule) {
                Ok(conf) => Some(conf),
                Err(e) => {
                    warn!(policy = %policy.name, key = %rule.key, error = %e, "Skipping unresolvable rule");
                    None
                }
            })
            .collect()
    }
}
