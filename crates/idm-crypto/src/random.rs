//! Secure random sampling.
//!
//! Production callers use [`secure_rng`], the thread-local generator which is
//! cryptographically secure and never shared between threads. Tests pass a
//! seeded generator instead.

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

/// Returns the thread-local cryptographically secure RNG.
#[must_use]
pub fn secure_rng() -> ThreadRng {
    rand::rng()
}

/// Returns a deterministic RNG built from a seed.
///
/// # Warning
///
/// Only for tests and reproducible diagnostics. Never use the output of a
/// seeded generator as a credential.
#[must_use]
pub fn seeded_rng(seed: [u8; 32]) -> StdRng {
    StdRng::from_seed(seed)
}

/// Draws `count` characters from `pool`, with replacement.
///
/// Returns `None` when `count > 0` and the pool is empty.
pub fn choose_many<R>(rng: &mut R, pool: &[char], count: usize) -> Option<Vec<char>>
where
    R: Rng + ?Sized,
{
    (0..count).map(|_| pool.choose(&mut *rng).copied()).collect()
}

/// Picks a length uniformly in `[min, max]`.
///
/// Returns `min` when the range is empty or a single value.
pub fn length_between<R>(rng: &mut R, min: usize, max: usize) -> usize
where
    R: Rng + ?Sized,
{
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Shuffles `chars` in place.
pub fn shuffle<R>(rng: &mut R, chars: &mut [char])
where
    R: Rng + ?Sized,
{
    chars.shuffle(rng);
}
