//! Identity snapshots consumed by account rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read-only view of an identity under evaluation.
pub trait Identity {
    /// The candidate account identifier.
    fn username(&self) -> &str;

    /// The resolved value of the attribute bound to `schema`, if any.
    fn attribute_value(&self, schema: &str) -> Option<&str>;
}

/// A username plus single-valued attributes keyed by schema name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// Username.
    pub username: String,
    /// Attribute values keyed by schema name.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl UserSnapshot {
    /// Creates a snapshot with no attributes.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute value.
    #[must_use]
    pub fn with_attribute(mut self, schema: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(schema.into(), value.into());
        self
    }
}

impl Identity for UserSnapshot {
    fn username(&self) -> &str {
        &self.username
    }

    fn attribute_value(&self, schema: &str) -> Option<&str> {
        self.attributes.get(schema).map(String::as_str)
    }
}
