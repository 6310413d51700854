//! Password generation.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace, warn};
use zeroize::{Zeroize, Zeroizing};

use super::charset::{self, Group};
use crate::error::PassError;
use crate::rand::{CryptoSource, SecureRandom, shuffle};
use crate::settings::Config;

/// Attempts [`Generator::generate`] makes before reporting exhaustion.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Produces passwords with no repeated symbol, each one unique for the
/// lifetime of the generator.
///
/// Uniqueness is tracked in a used-set mutated through `&mut self`. One
/// generator is meant for one call stack: callers building batches in
/// parallel should give each worker its own generator (and so its own
/// used-set), or wrap a shared one in a lock. Separate generators do not know
/// about each other's output.
///
/// Passwords remembered in the used-set are zeroized on drop.
pub struct Generator<R = CryptoSource> {
    symbols: Vec<char>,
    groups: Vec<Group>,
    length: usize,
    used: HashSet<String>,
    max_attempts: usize,
    rng: R,
}

impl Generator<CryptoSource> {
    /// Generator drawing from the operating system CSPRNG.
    pub fn new(config: &Config) -> Result<Self, PassError> {
        Self::with_source(config, CryptoSource::os())
    }
}

impl<R: SecureRandom> Generator<R> {
    pub fn with_source(config: &Config, rng: R) -> Result<Self, PassError> {
        config.validate()?;

        let charset = charset::build(config);
        if config.length > charset.len() {
            return Err(PassError::LengthExceedsCharset {
                length: config.length,
                available: charset.len(),
            });
        }

        debug!(
            length = config.length,
            charset = charset.len(),
            groups = charset.groups().len(),
            max_attempts = DEFAULT_MAX_ATTEMPTS,
            "generator ready"
        );

        let (symbols, groups) = charset.into_parts();
        Ok(Self {
            symbols,
            groups,
            length: config.length,
            used: HashSet::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng,
        })
    }

    /// Override the per-password attempt bound. Zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// How many distinct passwords this generator has handed out.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// One password not produced before by this generator.
    ///
    /// Retries up to the attempt bound on collisions. Any other failure is
    /// returned straight away.
    pub fn generate(&mut self) -> Result<String, PassError> {
        for attempt in 1..=self.max_attempts {
            let mut candidate = self.generate_one()?;

            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return Ok(candidate);
            }

            trace!(attempt, "candidate collided with an earlier password");
            candidate.zeroize();
        }

        warn!(
            attempts = self.max_attempts,
            used = self.used.len(),
            "no unique password found within attempt bound"
        );
        Err(PassError::ExhaustedAttempts {
            attempts: self.max_attempts,
        })
    }

    /// `count` pairwise-distinct passwords, in generation order.
    pub fn generate_unique(&mut self, count: usize) -> Result<Vec<String>, PassError> {
        if count == 0 {
            return Err(PassError::InvalidCount);
        }

        let mut passwords = Vec::with_capacity(count.min(1024));
        for index in 0..count {
            let password = self.generate().map_err(|source| PassError::Batch {
                index,
                count,
                source: Box::new(source),
            })?;
            passwords.push(password);
        }

        debug!(count, used = self.used.len(), "batch complete");
        Ok(passwords)
    }

    /// Build one candidate without checking uniqueness.
    ///
    /// Symbols are drawn without replacement from a working copy of the
    /// charset, so repeats are impossible by construction. When several
    /// categories are selected each contributes one forced pick first; the
    /// final shuffle hides where those picks landed.
    fn generate_one(&mut self) -> Result<String, PassError> {
        let mut pool = Zeroizing::new(self.symbols.clone());
        let mut picked = Zeroizing::new(Vec::with_capacity(self.length));

        if self.groups.len() > 1 {
            for group in &self.groups {
                let candidates: Vec<usize> = pool
                    .iter()
                    .enumerate()
                    .filter(|&(_, &symbol)| group.contains(symbol))
                    .map(|(i, _)| i)
                    .collect();

                if candidates.is_empty() {
                    return Err(PassError::InsufficientCategorySymbols {
                        category: group.category(),
                    });
                }

                let at = candidates[self.rng.below(candidates.len())?];
                picked.push(pool.remove(at));
            }
        }

        let remaining = self.length.saturating_sub(picked.len());
        for _ in 0..remaining {
            if pool.is_empty() {
                return Err(PassError::InsufficientSymbols {
                    needed: self.length,
                    available: self.symbols.len(),
                });
            }

            let at = self.rng.below(pool.len())?;
            picked.push(pool.remove(at));
        }

        shuffle(picked.as_mut_slice(), &mut self.rng)?;

        Ok(picked.iter().collect())
    }
}

impl<R> fmt::Debug for Generator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("charset", &self.symbols.len())
            .field("groups", &self.groups.len())
            .field("length", &self.length)
            .field("used", &self.used.len())
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl<R> Drop for Generator<R> {
    fn drop(&mut self) {
        for mut password in self.used.drain() {
            password.zeroize();
        }
    }
}
