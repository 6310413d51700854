//! OS entropy source, plus a seeded ChaCha stream for reproducible runs.

use ::rand::rngs::OsRng;
use ::rand::{SeedableRng, TryCryptoRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

use super::{RandError, SecureRandom};

/// [`SecureRandom`] over any cryptographic `rand` generator.
///
/// Draws are made unbiased by rejection sampling over full `u64` words.
/// Every word read from the generator is zeroized once used.
#[derive(Debug, Clone)]
pub struct CryptoSource<R = OsRng> {
    rng: R,
}

impl CryptoSource<OsRng> {
    /// Draws straight from the operating system CSPRNG.
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for CryptoSource<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl CryptoSource<ChaCha20Rng> {
    /// Deterministic stream for tests and reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: TryCryptoRng> CryptoSource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: TryCryptoRng> SecureRandom for CryptoSource<R> {
    fn below(&mut self, bound: usize) -> Result<usize, RandError> {
        if bound == 0 {
            return Err(RandError::EmptyRange);
        }

        let bound = bound as u64;
        // Largest multiple of `bound` representable; words at or past it are redrawn.
        let zone = u64::MAX - u64::MAX % bound;

        loop {
            let mut word = self
                .rng
                .try_next_u64()
                .map_err(|e| RandError::Source(e.to_string()))?;

            if word < zone {
                let value = (word % bound) as usize;
                word.zeroize();
                return Ok(value);
            }
            word.zeroize();
        }
    }
}
