//! Rule factories for the SPI system.

use std::fmt::Debug;

use idm_model::{Implementation, ImplementationType, RuleConf, ENGINE_JSON, ENGINE_TOML};
use thiserror::Error;

/// Error type for rule resolution.
#[derive(Debug, Error)]
pub enum RuleError {
    /// No factory is registered for the engine tag.
    #[error("unsupported rule engine: {0}")]
    UnsupportedEngine(String),

    /// The body could not be decoded.
    #[error("malformed body for implementation {key}: {reason}")]
    MalformedBody {
        /// Implementation key.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// The body decoded to a configuration of a different kind.
    #[error("implementation {key} is declared {declared} but its body configures {actual}")]
    KindMismatch {
        /// Implementation key.
        key: String,
        /// Declared type.
        declared: ImplementationType,
        /// Type of the decoded configuration.
        actual: ImplementationType,
    },
}

/// Metadata about a factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryMetadata {
    /// Engine tag handled by the factory.
    pub engine: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// Description of the body format.
    pub description: &'static str,
}

/// Builds rule configurations from the bodies of one engine.
///
/// Factories are stateless singletons shared across threads.
pub trait RuleFactory: Send + Sync + Debug {
    /// Returns the engine tag this factory handles.
    fn engine(&self) -> &'static str;

    /// Returns metadata about this factory.
    fn metadata(&self) -> FactoryMetadata;

    /// Decodes the implementation body.
    ///
    /// ## Errors
    ///
    /// Returns [`RuleError::MalformedBody`] if the body cannot be decoded.
    fn build(&self, implementation: &Implementation) -> Result<RuleConf, RuleError>;
}

/// Factory for JSON bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRuleFactory;

impl RuleFactory for JsonRuleFactory {
    fn engine(&self) -> &'static str {
        ENGINE_JSON
    }

    fn metadata(&self) -> FactoryMetadata {
        FactoryMetadata {
            engine: ENGINE_JSON,
            name: "JSON rule factory",
            description: "Internally tagged JSON rule configuration",
        }
    }

    fn build(&self, implementation: &Implementation) -> Result<RuleConf, RuleError> {
        serde_json::from_str(&implementation.body).map_err(|e| RuleError::MalformedBody {
            key: implementation.key.clone(),
            reason: e.to_string(),
        })
    }
}

/// Factory for TOML bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlRuleFactory;

impl RuleFactory for TomlRuleFactory {
    fn engine(&self) -> &'static str {
        ENGINE_TOML
    }

    fn metadata(&self) -> FactoryMetadata {
        FactoryMetadata {
            engine: ENGINE_TOML,
            name: "TOML rule factory",
            description: "Internally tagged TOML rule configuration",
        }
    }

    fn build(&self, implementation: &Implementation) -> Result<RuleConf, RuleError> {
        toml::from_str(&implementation.body).map_err(|e| RuleError::MalformedBody {
            key: implementation.key.clone(),
            reason: e.to_string(),
        })
    }
}
