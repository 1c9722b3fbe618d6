//! # idm-policy
//!
//! The password and account policy rule engine.
//!
//! - [`merge`] - Reduces several password rule configurations to one
//! - [`PasswordGenerator`] - Generates a password satisfying the merged rules
//! - [`AccountRuleEvaluator`] - Checks a username against an account rule
//!
//! Every operation is a pure function of its inputs. Rule implementations
//! are resolved through an [`idm_spi::RuleSource`]; implementations that do
//! not resolve are skipped.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod account;
pub mod error;
pub mod generator;
pub mod merge;

pub use account::{enforce_account_policies, AccountRuleEvaluator};
pub use error::{AccountViolation, PolicyError, PolicyResult};
pub use generator::{default_password, PasswordGenerator};
pub use merge::merge;
