//! Rule configuration models.
//!
//! Two configuration kinds exist today: [`DefaultPasswordRuleConf`] for
//! password generation and [`DefaultAccountRuleConf`] for username checks.
//! [`RuleConf`] is the closed set of kinds a rule implementation can carry;
//! new kinds are added as new variants.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::implementation::ImplementationType;

/// Minimum password length used when no positive minimum is configured.
pub const MIN_LENGTH_IF_ZERO: i32 = 8;

/// Maximum password length used when no positive maximum is configured.
pub const VERY_MAX_LENGTH: i32 = 64;

/// Password rule configuration.
///
/// Non-positive `min_length`/`max_length` mean "unset" and negative class
/// counts are treated as zero; see [`DefaultPasswordRuleConf::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPasswordRuleConf {
    /// Display name of the rule.
    pub name: String,
    /// Minimum password length.
    pub min_length: i32,
    /// Maximum password length.
    pub max_length: i32,
    /// Minimum number of letters.
    pub alphabetical: i32,
    /// Minimum number of uppercase letters.
    pub uppercase: i32,
    /// Minimum number of lowercase letters.
    pub lowercase: i32,
    /// Required number of digits.
    pub digit: i32,
    /// Minimum number of characters drawn from `special_chars`.
    pub special: i32,
    /// Characters eligible for the `special` requirement.
    pub special_chars: BTreeSet<char>,
    /// Characters that must never appear.
    pub illegal_chars: BTreeSet<char>,
    /// Longest permitted run of one repeated character (0 = unlimited).
    pub repeat_same: i32,
    /// Whether the password may contain the username.
    pub username_allowed: bool,
    /// Words the password must not contain.
    pub words_not_permitted: BTreeSet<String>,
    /// Schemas whose attribute values the password must not contain.
    pub schemas_not_permitted: BTreeSet<String>,
}

impl DefaultPasswordRuleConf {
    /// Creates an empty configuration; every field is unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration used when no other configuration applies.
    #[must_use]
    pub fn effective_default() -> Self {
        Self {
            min_length: MIN_LENGTH_IF_ZERO,
            max_length: VERY_MAX_LENGTH,
            ..Self::default()
        }
    }

    /// Sets the rule name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the minimum length.
    #[must_use]
    pub const fn min_length(mut self, value: i32) -> Self {
        self.min_length = value;
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn max_length(mut self, value: i32) -> Self {
        self.max_length = value;
        self
    }

    /// Sets the minimum letter count.
    #[must_use]
    pub const fn alphabetical(mut self, value: i32) -> Self {
        self.alphabetical = value;
        self
    }

    /// Sets the minimum uppercase count.
    #[must_use]
    pub const fn uppercase(mut self, value: i32) -> Self {
        self.uppercase = value;
        self
    }

    /// Sets the minimum lowercase count.
    #[must_use]
    pub const fn lowercase(mut self, value: i32) -> Self {
        self.lowercase = value;
        self
    }

    /// Sets the exact digit count.
    #[must_use]
    pub const fn digit(mut self, value: i32) -> Self {
        self.digit = value;
        self
    }

    /// Sets the minimum special character count.
    #[must_use]
    pub const fn special(mut self, value: i32) -> Self {
        self.special = value;
        self
    }

    /// Adds characters to the special pool.
    #[must_use]
    pub fn special_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.special_chars.extend(chars);
        self
    }

    /// Adds characters to the illegal set.
    #[must_use]
    pub fn illegal_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.illegal_chars.extend(chars);
        self
    }

    /// Sets the longest permitted run of a repeated character.
    #[must_use]
    pub const fn repeat_same(mut self, value: i32) -> Self {
        self.repeat_same = value;
        self
    }

    /// Sets whether the username may appear in the password.
    #[must_use]
    pub const fn username_allowed(mut self, allowed: bool) -> Self {
        self.username_allowed = allowed;
        self
    }

    /// Adds forbidden words.
    #[must_use]
    pub fn words_not_permitted<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words_not_permitted.extend(words.into_iter().map(Into::into));
        self
    }

    /// Adds forbidden schemas.
    #[must_use]
    pub fn schemas_not_permitted<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemas_not_permitted
            .extend(schemas.into_iter().map(Into::into));
        self
    }

    /// Resolves unset bounds and negative counts.
    ///
    /// - `min_length <= 0` becomes [`MIN_LENGTH_IF_ZERO`].
    /// - `max_length <= 0` becomes [`VERY_MAX_LENGTH`] when the minimum was
    ///   unset too, otherwise it takes the resolved minimum.
    /// - Negative class counts and `repeat_same` become 0.
    ///
    /// The result may still have `min_length > max_length`; merging collapses
    /// that case.
    ///
    /// A configuration with a minimum but no maximum therefore pins the
    /// merged maximum to that minimum: `[min = 12]` merged with
    /// `[max = 14]` yields exactly `[12, 12]`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let min_unset = self.min_length <= 0;
        let min_length = if min_unset {
            MIN_LENGTH_IF_ZERO
        } else {
            self.min_length
        };
        let max_length = match (self.max_length > 0, min_unset) {
            (true, _) => self.max_length,
            (false, true) => VERY_MAX_LENGTH,
            (false, false) => min_length,
        };

        Self {
            min_length,
            max_length,
            alphabetical: self.alphabetical.max(0),
            uppercase: self.uppercase.max(0),
            lowercase: self.lowercase.max(0),
            digit: self.digit.max(0),
            special: self.special.max(0),
            repeat_same: self.repeat_same.max(0),
            ..self.clone()
        }
    }
}

/// Account (username) rule configuration.
///
/// Non-positive length bounds impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultAccountRuleConf {
    /// Display name of the rule.
    pub name: String,
    /// Minimum username length.
    pub min_length: i32,
    /// Maximum username length.
    pub max_length: i32,
    /// Regular expression the whole username must match.
    pub pattern: Option<String>,
    /// Reject usernames containing lowercase letters.
    pub all_upper_case: bool,
    /// Reject usernames containing uppercase letters.
    pub all_lower_case: bool,
    /// Words the username must not contain.
    pub words_not_permitted: BTreeSet<String>,
    /// Schemas whose attribute values the username must not contain.
    pub schemas_not_permitted: BTreeSet<String>,
    /// Prefixes the username must not start with.
    pub prefixes_not_permitted: BTreeSet<String>,
    /// Suffixes the username must not end with.
    pub suffixes_not_permitted: BTreeSet<String>,
}

impl DefaultAccountRuleConf {
    /// Creates an empty configuration that accepts every username.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the minimum length.
    #[must_use]
    pub const fn min_length(mut self, value: i32) -> Self {
        self.min_length = value;
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn max_length(mut self, value: i32) -> Self {
        self.max_length = value;
        self
    }

    /// Sets the full-match pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Requires an all-uppercase username.
    #[must_use]
    pub const fn all_upper_case(mut self, value: bool) -> Self {
        self.all_upper_case = value;
        self
    }

    /// Requires an all-lowercase username.
    #[must_use]
    pub const fn all_lower_case(mut self, value: bool) -> Self {
        self.all_lower_case = value;
        self
    }

    /// Adds forbidden words.
    #[must_use]
    pub fn words_not_permitted<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words_not_permitted.extend(words.into_iter().map(Into::into));
        self
    }

    /// Adds forbidden schemas.
    #[must_use]
    pub fn schemas_not_permitted<I, S>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemas_not_permitted
            .extend(schemas.into_iter().map(Into::into));
        self
    }

    /// Adds forbidden prefixes.
    #[must_use]
    pub fn prefixes_not_permitted<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes_not_permitted
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Adds forbidden suffixes.
    #[must_use]
    pub fn suffixes_not_permitted<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes_not_permitted
            .extend(suffixes.into_iter().map(Into::into));
        self
    }
}

/// A rule configuration of any supported kind.
///
/// Serialized bodies are internally tagged with `kind`, for example
/// `{"kind": "default_password_rule", "min_length": 10}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConf {
    /// Password generation constraints.
    DefaultPasswordRule(DefaultPasswordRuleConf),
    /// Username constraints.
    DefaultAccountRule(DefaultAccountRuleConf),
}

impl RuleConf {
    /// Returns the configured rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::DefaultPasswordRule(conf) => &conf.name,
            Self::DefaultAccountRule(conf) => &conf.name,
        }
    }

    /// Returns the implementation type able to carry this configuration.
    #[must_use]
    pub const fn implementation_type(&self) -> ImplementationType {
        match self {
            Self::DefaultPasswordRule(_) => ImplementationType::PasswordRule,
            Self::DefaultAccountRule(_) => ImplementationType::AccountRule,
        }
    }

    /// Returns the password configuration, if this is one.
    #[must_use]
    pub const fn as_password(&self) -> Option<&DefaultPasswordRuleConf> {
        match self {
            Self::DefaultPasswordRule(conf) => Some(conf),
            Self::DefaultAccountRule(_) => None,
        }
    }

    /// Returns the account configuration, if this is one.
    #[must_use]
    pub const fn as_account(&self) -> Option<&DefaultAccountRuleConf> {
        match self {
            Self::DefaultAccountRule(conf) => Some(conf),
            Self::DefaultPasswordRule(_) => None,
        }
    }
}

impl From<DefaultPasswordRuleConf> for RuleConf {
    fn from(conf: DefaultPasswordRuleConf) -> Self {
        Self::DefaultPasswordRule(conf)
    }
}

impl From<DefaultAccountRuleConf> for RuleConf {
    fn from(conf: DefaultAccountRuleConf) -> Self {
        Self::DefaultAccountRule(conf)
    }
}
