//! Password and account policy models.
//!
//! A policy is a named, ordered collection of rule implementations attached
//! to an identity domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::implementation::Implementation;

/// A password policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Unique identifier.
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,
    /// Policy name.
    pub name: String,
    /// Whether users governed by this policy may have no password.
    #[serde(default)]
    pub allow_null_password: bool,
    /// Number of previous passwords remembered.
    #[serde(default)]
    pub history_length: i32,
    /// Rule implementations, in evaluation order.
    #[serde(default)]
    pub rules: Vec<Implementation>,
}

impl PasswordPolicy {
    /// Creates an empty password policy.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            allow_null_password: false,
            history_length: 0,
            rules: Vec::new(),
        }
    }

    /// Adds a rule implementation.
    ///
    /// Returns `false` if the same implementation was already attached.
    pub fn add(&mut self, rule: Implementation) -> bool {
        add_unique(&mut self.rules, rule)
    }

    /// Adds a rule implementation, builder style.
    #[must_use]
    pub fn with_rule(mut self, rule: Implementation) -> Self {
        self.add(rule);
        self
    }
}

/// An account policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Unique identifier.
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,
    /// Policy name.
    pub name: String,
    /// Whether suspension propagates to linked resources.
    #[serde(default)]
    pub propagate_suspension: bool,
    /// Failed logins before suspension (0 = unlimited).
    #[serde(default)]
    pub max_authentication_attempts: i32,
    /// Rule implementations, in evaluation order.
    #[serde(default)]
    pub rules: Vec<Implementation>,
}

impl AccountPolicy {
    /// Creates an empty account policy.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            propagate_suspension: false,
            max_authentication_attempts: 0,
            rules: Vec::new(),
        }
    }

    /// Adds a rule implementation.
    ///
    /// Returns `false` if the same implementation was already attached.
    pub fn add(&mut self, rule: Implementation) -> bool {
        add_unique(&mut self.rules, rule)
    }

    /// Adds a rule implementation, builder style.
    #[must_use]
    pub fn with_rule(mut self, rule: Implementation) -> Self {
        self.add(rule);
        self
    }
}

fn add_unique(rules: &mut Vec<Implementation>, rule: Implementation) -> bool {
    if rules.contains(&rule) {
        return false;
    }
    rules.push(rule);
    true
}
