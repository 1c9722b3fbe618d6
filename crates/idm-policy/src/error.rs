//! Policy engine error types.

use thiserror::Error;

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors raised by the policy engine.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A required argument was absent.
    #[error("{0} must not be null")]
    NullInput(&'static str),

    /// The configuration cannot be used for the requested operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configured requirements cannot fit in the allowed length.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// An account rule pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    PatternSyntax(#[from] regex::Error),

    /// A username broke an account rule.
    #[error("account policy violation: {0}")]
    AccountPolicy(#[from] AccountViolation),
}

impl PolicyError {
    /// Returns true if this is an account policy violation.
    ///
    /// Violations are the expected outcome of checking a bad username; every
    /// other variant points at a caller or configuration defect.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        matches!(self, Self::AccountPolicy(_))
    }

    /// Returns true if the error comes from an unusable configuration.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::CapacityExceeded(_) | Self::PatternSyntax(_)
        )
    }
}

/// The account rule check a username failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountViolation {
    /// Shorter than the minimum length.
    #[error("username is shorter than {min} characters")]
    TooShort {
        /// Configured minimum.
        min: usize,
    },

    /// Longer than the maximum length.
    #[error("username is longer than {max} characters")]
    TooLong {
        /// Configured maximum.
        max: usize,
    },

    /// Contains lowercase letters where all uppercase is required.
    #[error("username must be all uppercase")]
    NotAllUpperCase,

    /// Contains uppercase letters where all lowercase is required.
    #[error("username must be all lowercase")]
    NotAllLowerCase,

    /// Does not fully match the configured pattern.
    #[error("username does not match pattern {pattern}")]
    PatternMismatch {
        /// Configured pattern.
        pattern: String,
    },

    /// Contains a forbidden word.
    #[error("username contains forbidden word {word}")]
    WordNotPermitted {
        /// The forbidden word.
        word: String,
    },

    /// Contains the value of a forbidden attribute.
    #[error("username contains the value of attribute {schema}")]
    SchemaValueNotPermitted {
        /// Schema whose value was found.
        schema: String,
    },

    /// Starts with a forbidden prefix.
    #[error("username starts with forbidden prefix {prefix}")]
    PrefixNotPermitted {
        /// The forbidden prefix.
        prefix: String,
    },

    /// Ends with a forbidden suffix.
    #[error("username ends with forbidden suffix {suffix}")]
    SuffixNotPermitted {
        /// The forbidden suffix.
        suffix: String,
    },
}
