//! End-to-end tests of the policy engine.
//!
//! Rules travel through the same path as in production: serialized bodies,
//! resolved by the engine registry, merged and then enforced.

mod account_rules;
mod common;
mod merge_rules;
