//! # idm-model
//!
//! Domain models for the identity policy engine.
//!
//! Rule configurations are immutable snapshots handed to the engine by the
//! persistence layer. Policies carry the opaque rule implementations that the
//! rule source turns into those configurations.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod identity;
pub mod implementation;
pub mod policy;
pub mod rule;

pub use identity::{Identity, UserSnapshot};
pub use implementation::{Implementation, ImplementationType, ENGINE_JSON, ENGINE_TOML};
pub use policy::{AccountPolicy, PasswordPolicy};
pub use rule::{
    DefaultAccountRuleConf, DefaultPasswordRuleConf, RuleConf, MIN_LENGTH_IF_ZERO,
    VERY_MAX_LENGTH,
};
