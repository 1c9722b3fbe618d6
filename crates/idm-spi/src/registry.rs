//! Engine registry for rule factories.

use std::sync::Arc;

use dashmap::DashMap;
use idm_model::{Implementation, RuleConf};
use tracing::debug;

use crate::factory::{FactoryMetadata, JsonRuleFactory, RuleError, RuleFactory, TomlRuleFactory};
use crate::source::RuleSource;

/// Registry mapping engine tags to rule factories.
///
/// Lookups are concurrent; registration may happen at any time.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    factories: DashMap<String, Arc<dyn RuleFactory>>,
}

impl RuleRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the JSON and TOML factories registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(JsonRuleFactory);
        registry.register(TomlRuleFactory);
        registry
    }

    /// Registers a factory under its engine tag.
    ///
    /// Returns the factory previously registered for the same tag, if any.
    pub fn register<F>(&self, factory: F) -> Option<Arc<dyn RuleFactory>>
    where
        F: RuleFactory + 'static,
    {
        let engine = factory.engine();
        debug!(engine, "Registering rule factory");
        self.factories.insert(engine.to_string(), Arc::new(factory))
    }

    /// Removes the factory for an engine tag.
    pub fn unregister(&self, engine: &str) -> Option<Arc<dyn RuleFactory>> {
        self.factories.remove(engine).map(|(_, factory)| factory)
    }

    /// Checks if an engine is registered.
    #[must_use]
    pub fn has_engine(&self, engine: &str) -> bool {
        self.factories.contains_key(engine)
    }

    /// Lists registered engine tags, sorted.
    #[must_use]
    pub fn engines(&self) -> Vec<String> {
        let mut engines: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        engines.sort();
        engines
    }

    /// Gets factory metadata by engine tag.
    #[must_use]
    pub fn metadata(&self, engine: &str) -> Option<FactoryMetadata> {
        self.factories.get(engine).map(|f| f.metadata())
    }

    fn factory(&self, engine: &str) -> Option<Arc<dyn RuleFactory>> {
        self.factories.get(engine).map(|f| Arc::clone(f.value()))
    }
}

impl RuleSource for RuleRegistry {
    fn resolve(&self, implementation: &Implementation) -> Result<RuleConf, RuleError> {
        let factory = self
            .factory(&implementation.engine)
            .ok_or_else(|| RuleError::UnsupportedEngine(implementation.engine.clone()))?;

        let conf = factory.build(implementation)?;
        let actual = conf.implementation_type();
        if actual != implementation.implementation_type {
            return Err(RuleError::KindMismatch {
                key: implementation.key.clone(),
                declared: implementation.implementation_type,
                actual,
            });
        }

        Ok(conf)
    }
}
