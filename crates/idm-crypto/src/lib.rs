//! # idm-crypto
//!
//! Randomness primitives for password generation.
//!
//! - [`charset`] - ASCII character classes and pool construction
//! - [`random`] - Sampling, length selection and shuffling over a caller
//!   supplied RNG, plus the thread-local secure RNG used in production
//!
//! Every sampling function is generic over [`rand::Rng`] so callers can pass
//! the secure thread RNG or a seeded RNG in tests.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod charset;
pub mod random;

pub use charset::{pool, CharClass};
pub use random::{choose_many, length_between, secure_rng, seeded_rng, shuffle};
