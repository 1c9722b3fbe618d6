//! Stored rule implementations.
//!
//! An implementation is an opaque serialized body plus the engine tag that
//! knows how to read it. The rule source decides whether a given engine is
//! available; the model only carries the data.

use serde::{Deserialize, Serialize};

/// Engine tag for JSON-encoded rule bodies.
pub const ENGINE_JSON: &str = "JSON";

/// Engine tag for TOML-encoded rule bodies.
pub const ENGINE_TOML: &str = "TOML";

/// What a rule implementation is declared to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImplementationType {
    /// Password rule.
    PasswordRule,
    /// Account rule.
    AccountRule,
}

impl ImplementationType {
    /// Returns the string representation used in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PasswordRule => "PASSWORD_RULE",
            Self::AccountRule => "ACCOUNT_RULE",
        }
    }
}

impl std::fmt::Display for ImplementationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored rule implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    /// Unique key of the implementation.
    pub key: String,
    /// Engine tag used to interpret `body`.
    pub engine: String,
    /// Declared implementation type.
    #[serde(rename = "type")]
    pub implementation_type: ImplementationType,
    /// Serialized rule configuration.
    pub body: String,
}

impl Implementation {
    /// Creates a new implementation.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        engine: impl Into<String>,
        implementation_type: ImplementationType,
        body: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            engine: engine.into(),
            implementation_type,
            body: body.into(),
        }
    }

    /// Creates a JSON password rule implementation.
    #[must_use]
    pub fn json_password_rule(key: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(key, ENGINE_JSON, ImplementationType::PasswordRule, body)
    }

    /// Creates a JSON account rule implementation.
    #[must_use]
    pub fn json_account_rule(key: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(key, ENGINE_JSON, ImplementationType::AccountRule, body)
    }
}
