//! Account (username) rule evaluation.

use idm_model::{AccountPolicy, DefaultAccountRuleConf, Identity, RuleConf};
use idm_spi::RuleSource;
use regex::Regex;
use regex_syntax::hir::{Hir, Look};
use regex_syntax::Parser;
use tracing::{debug, warn};

use crate::error::{AccountViolation, PolicyError, PolicyResult};

/// Checks usernames against one account rule configuration.
///
/// Checks run in a fixed order and stop at the first violation: length,
/// case, pattern, forbidden words, forbidden attribute values, prefixes,
/// suffixes.
#[derive(Debug, Clone, Default)]
pub struct AccountRuleEvaluator {
    conf: Option<DefaultAccountRuleConf>,
}

impl AccountRuleEvaluator {
    /// Creates an evaluator with no configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration to enforce.
    ///
    /// ## Errors
    ///
    /// - [`PolicyError::NullInput`] if `conf` is `None`
    /// - [`PolicyError::InvalidArgument`] if `conf` is not an account rule
    pub fn set_configuration(&mut self, conf: Option<&RuleConf>) -> PolicyResult<()> {
        match conf.ok_or(PolicyError::NullInput("account rule configuration"))? {
            RuleConf::DefaultAccountRule(conf) => {
                self.conf = Some(conf.clone());
                Ok(())
            }
            other => Err(PolicyError::InvalidArgument(format!(
                "{} configuration cannot drive an account rule",
                other.implementation_type()
            ))),
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn configuration(&self) -> Option<&DefaultAccountRuleConf> {
        self.conf.as_ref()
    }

    /// Checks the username of `identity`.
    ///
    /// Attribute values that are present but empty never match, since every
    /// username would otherwise contain them.
    ///
    /// ## Errors
    ///
    /// - [`PolicyError::AccountPolicy`] naming the first failed check
    /// - [`PolicyError::PatternSyntax`] if the configured pattern is malformed
    /// - [`PolicyError::NullInput`] if no configuration was set
    pub fn enforce(&self, identity: &dyn Identity) -> PolicyResult<()> {
        let conf = self
            .conf
            .as_ref()
            .ok_or(PolicyError::NullInput("account rule configuration"))?;
        let username = identity.username();

        let length = username.chars().count();
        if let Some(min) = bound(conf.min_length) {
            if length < min {
                return Err(AccountViolation::TooShort { min }.into());
            }
        }
        if let Some(max) = bound(conf.max_length) {
            if length > max {
                return Err(AccountViolation::TooLong { max }.into());
            }
        }

        if conf.all_upper_case && username.chars().any(char::is_lowercase) {
            return Err(AccountViolation::NotAllUpperCase.into());
        }
        if conf.all_lower_case && username.chars().any(char::is_uppercase) {
            return Err(AccountViolation::NotAllLowerCase.into());
        }

        if let Some(pattern) = conf.pattern.as_deref().filter(|p| !p.is_empty()) {
            if !full_match(pattern)?.is_match(username) {
                return Err(AccountViolation::PatternMismatch {
                    pattern: pattern.to_string(),
                }
                .into());
            }
        }

        if let Some(word) = conf
            .words_not_permitted
            .iter()
            .find(|w| username.contains(w.as_str()))
        {
            return Err(AccountViolation::WordNotPermitted { word: word.clone() }.into());
        }

        for schema in &conf.schemas_not_permitted {
            match identity.attribute_value(schema) {
                Some(value) if !value.is_empty() && username.contains(value) => {
                    return Err(AccountViolation::SchemaValueNotPermitted {
                        schema: schema.clone(),
                    }
                    .into());
                }
                Some(_) => {}
                None => debug!(schema = %schema, "Identity has no value for schema"),
            }
        }

        if let Some(prefix) = conf
            .prefixes_not_permitted
            .iter()
            .find(|p| username.starts_with(p.as_str()))
        {
            return Err(AccountViolation::PrefixNotPermitted {
                prefix: prefix.clone(),
            }
            .into());
        }
        if let Some(suffix) = conf
            .suffixes_not_permitted
            .iter()
            .find(|s| username.ends_with(s.as_str()))
        {
            return Err(AccountViolation::SuffixNotPermitted {
                suffix: suffix.clone(),
            }
            .into());
        }

        Ok(())
    }
}

/// Enforces every account rule of every policy against `identity`.
///
/// Rule implementations that do not resolve, or resolve to another kind of
/// rule, are skipped. The first violation is returned.
///
/// ## Errors
///
/// - [`PolicyError::NullInput`] if `policies` is `None`
/// - any error of [`AccountRuleEvaluator::enforce`]
pub fn enforce_account_policies(
    source: &dyn RuleSource,
    policies: Option<&[AccountPolicy]>,
    identity: &dyn Identity,
) -> PolicyResult<()> {
    let policies = policies.ok_or(PolicyError::NullInput("account policies"))?;
    let mut evaluator = AccountRuleEvaluator::new();

    for policy in policies {
        for conf in source.resolve_account_rules(policy) {
            if conf.as_account().is_none() {
                warn!(
                    policy = %policy.name,
                    rule = %conf.name(),
                    kind = %conf.implementation_type(),
                    "Skipping rule of another kind"
                );
                continue;
            }
            evaluator.set_configuration(Some(&conf))?;
            evaluator.enforce(identity)?;
        }
        debug!(policy = %policy.name, "Account policy satisfied");
    }

    Ok(())
}

fn bound(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v > 0)
}

/// Compiles `pattern` so that it must match the whole input.
///
/// Anchors are added to the parsed expression rather than the source text,
/// so inline flags and trailing `(?x)` comments keep their meaning.
fn full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    let hir = Parser::new()
        .parse(pattern)
        .map_err(|e| regex::Error::Syntax(e.to_string()))?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    Regex::new(&anchored.to_string())
}
