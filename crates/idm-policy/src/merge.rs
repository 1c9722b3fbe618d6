//! Password rule configuration merging.
//!
//! | Field | Reduction |
//! |---|---|
//! | `min_length` | maximum |
//! | `max_length` | minimum, raised to `min_length` if below it |
//! | class counts | maximum |
//! | `special_chars`, `illegal_chars`, `words_not_permitted` | union |
//! | `schemas_not_permitted` | dropped |
//! | `repeat_same` | maximum |
//! | `username_allowed` | any |
//!
//! Each configuration is [normalized](DefaultPasswordRuleConf::normalized)
//! before it takes part.

use idm_model::DefaultPasswordRuleConf;
use tracing::debug;

use crate::error::{PolicyError, PolicyResult};

/// Merges password rule configurations into one effective configuration.
///
/// An empty slice yields [`DefaultPasswordRuleConf::effective_default`].
///
/// ## Errors
///
/// Returns [`PolicyError::NullInput`] if `confs` is `None`.
pub fn merge(confs: Option<&[DefaultPasswordRuleConf]>) -> PolicyResult<DefaultPasswordRuleConf> {
    let confs = confs.ok_or(PolicyError::NullInput("password rule configurations"))?;

    let mut normalized = confs.iter().map(DefaultPasswordRuleConf::normalized);
    let Some(first) = normalized.next() else {
        return Ok(DefaultPasswordRuleConf::effective_default());
    };

    let mut merged = normalized.fold(first, combine);
    merged.name = String::new();
    // TODO: carry schemas_not_permitted once the generator can see identity attributes.
    merged.schemas_not_permitted.clear();
    if merged.max_length < merged.min_length {
        merged.max_length = merged.min_length;
    }

    debug!(
        count = confs.len(),
        min_length = merged.min_length,
        max_length = merged.max_length,
        "Merged password rule configurations"
    );
    Ok(merged)
}

fn combine(mut acc: DefaultPasswordRuleConf, conf: DefaultPasswordRuleConf) -> DefaultPasswordRuleConf {
    acc.min_length = acc.min_length.max(conf.min_length);
    acc.max_length = acc.max_length.min(conf.max_length);
    acc.alphabetical = acc.alphabetical.max(conf.alphabetical);
    acc.uppercase = acc.uppercase.max(conf.uppercase);
    acc.lowercase = acc.lowercase.max(conf.lowercase);
    acc.digit = acc.digit.max(conf.digit);
    acc.special = acc.special.max(conf.special);
    acc.repeat_same = acc.repeat_same.max(conf.repeat_same);
    acc.username_allowed |= conf.username_allowed;
    acc.special_chars.extend(conf.special_chars);
    acc.illegal_chars.extend(conf.illegal_chars);
    acc.words_not_permitted.extend(conf.words_not_permitted);
    acc
}
