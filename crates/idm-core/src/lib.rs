//! # idm-core
//!
//! Core utilities, configuration, and error handling for the identity policy
//! engine.
//!
//! This crate provides the ambient pieces shared by every other crate in the
//! workspace: the engine [`Config`], the [`logging`] bootstrap and the generic
//! [`Error`] type used while loading them.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, GeneratorConfig, LoggingConfig};
pub use error::{Error, Result};
