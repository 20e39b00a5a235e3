//! Sources of cryptographically secure random bytes.
//!
//! Everything that needs randomness (salts, nonces, generated passwords)
//! receives a `RandomSource` explicitly instead of reaching for a global
//! generator.  Production code uses `OsRandom`; tests can swap in
//! `SeededRandom` to get reproducible output.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};

use crate::errors::{Result, VaultError};

/// Anything that can fill a buffer with random bytes.
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Random bytes straight from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| VaultError::RandomUnavailable(e.to_string()))
    }
}

/// Deterministic generator seeded from a `u64`.
///
/// Never use this for real vaults: two instances with the same seed
/// produce the same salts and nonces.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.rng.fill_bytes(buf);
        Ok(())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// Draw a fixed-size array from `rng`.
pub fn random_array<const N: usize>(rng: &mut dyn RandomSource) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    rng.fill(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_fills_whole_buffer() {
        // 64 zero bytes from a working RNG is effectively impossible.
        let mut buf = [0u8; 64];
        OsRandom.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a: [u8; 32] = random_array(&mut SeededRandom::new(7)).unwrap();
        let b: [u8; 32] = random_array(&mut SeededRandom::new(7)).unwrap();
        let c: [u8; 32] = random_array(&mut SeededRandom::new(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn consecutive_draws_differ() {
        let mut rng = SeededRandom::new(1);
        let a: [u8; 12] = random_array(&mut rng).unwrap();
        let b: [u8; 12] = random_array(&mut rng).unwrap();
        assert_ne!(a, b);
    }
}
