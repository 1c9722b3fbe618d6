//! # idm-spi
//!
//! Service Provider Interface for resolving stored rule implementations.
//!
//! ## Design
//!
//! Rule implementations are opaque bodies tagged with an engine. Instead of
//! instantiating classes by name, resolution goes through a registry keyed by
//! that tag:
//! - [`RuleFactory`] - Turns a body of one engine into a [`RuleConf`](idm_model::RuleConf)
//! - [`RuleRegistry`] - Engine tag to factory mapping
//! - [`RuleSource`] - What the policy engine consumes; failures are skipped

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod factory;
pub mod registry;
pub mod source;

pub use factory::{FactoryMetadata, JsonRuleFactory, RuleError, RuleFactory, TomlRuleFactory};
pub use registry::RuleRegistry;
pub use source::RuleSource;
