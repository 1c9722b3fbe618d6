//! Fixtures shared by the integration tests.
//!
//! Policies are built the way a store would hand them over: each rule is a
//! JSON body tagged with its kind.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use idm_model::{
    AccountPolicy, DefaultAccountRuleConf, DefaultPasswordRuleConf, Implementation,
    PasswordPolicy, RuleConf, UserSnapshot,
};

/// Serializes a rule configuration into a JSON body.
pub fn json_body(conf: impl Into<RuleConf>) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&conf.into())?)
}

/// Builds a password policy with one JSON rule per configuration.
pub fn password_policy(
    name: &str,
    confs: &[DefaultPasswordRuleConf],
) -> anyhow::Result<PasswordPolicy> {
    confs
        .iter()
        .enumerate()
        .try_fold(PasswordPolicy::new(name), |policy, (i, conf)| {
            let body = json_body(conf.clone())?;
            Ok(policy.with_rule(Implementation::json_password_rule(format!("{name}-{i}"), body)))
        })
}

/// Builds an account policy with one JSON rule per configuration.
pub fn account_policy(
    name: &str,
    confs: &[DefaultAccountRuleConf],
) -> anyhow::Result<AccountPolicy> {
    confs
        .iter()
        .enumerate()
        .try_fold(AccountPolicy::new(name), |policy, (i, conf)| {
            let body = json_body(conf.clone())?;
            Ok(policy.with_rule(Implementation::json_account_rule(format!("{name}-{i}"), body)))
        })
}

/// The identity used by the account rule tables: `name` is `Mario`.
#[must_use]
pub fn mario(username: &str) -> UserSnapshot {
    UserSnapshot::new(username).with_attribute("name", "Mario")
}
