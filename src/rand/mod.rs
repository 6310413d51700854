//! Random number generation from a cryptographically secure source.
//!
//! Generators take their randomness through [`SecureRandom`] rather than a
//! process-wide global, so tests can hand in a scripted or failing source.

mod os;

pub use os::CryptoSource;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandError {
    #[error("random range must not be empty")]
    EmptyRange,
    #[error("entropy source failed: {0}")]
    Source(String),
}

/// Uniform draws over `[0, bound)`.
///
/// A failed draw is final for that call. Implementations must not fall back
/// to a weaker source.
pub trait SecureRandom {
    fn below(&mut self, bound: usize) -> Result<usize, RandError>;
}

impl<T: SecureRandom + ?Sized> SecureRandom for &mut T {
    #[inline]
    fn below(&mut self, bound: usize) -> Result<usize, RandError> {
        (**self).below(bound)
    }
}

/// Fisher-Yates shuffle, every swap index drawn from `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R) -> Result<(), RandError>
where
    R: SecureRandom + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Zeros(usize);

    impl SecureRandom for Zeros {
        fn below(&mut self, bound: usize) -> Result<usize, RandError> {
            if bound == 0 {
                return Err(RandError::EmptyRange);
            }
            self.0 += 1;
            Ok(0)
        }
    }

    struct Broken;

    impl SecureRandom for Broken {
        fn below(&mut self, _: usize) -> Result<usize, RandError> {
            Err(RandError::Source("unplugged".into()))
        }
    }

    #[test]
    fn shuffle_with_zero_draws_rotates_left() {
        let mut items = ['a', 'b', 'c', 'd'];
        let mut rng = Zeros(0);
        shuffle(&mut items, &mut rng).unwrap();
        assert_eq!(items, ['b', 'c', 'd', 'a']);
        assert_eq!(rng.0, 3);
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut rng = Zeros(0);
        let mut empty: [char; 0] = [];
        shuffle(&mut empty, &mut rng).unwrap();
        let mut one = ['x'];
        shuffle(&mut one, &mut rng).unwrap();
        assert_eq!(rng.0, 0);
    }

    #[test]
    fn shuffle_propagates_source_failure() {
        let mut items = [1, 2, 3];
        let err = shuffle(&mut items, &mut Broken).unwrap_err();
        assert_eq!(err, RandError::Source("unplugged".into()));
    }

    #[test]
    fn shuffle_keeps_every_item() {
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut CryptoSource::seeded(7)).unwrap();
        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<_>>());
    }
}
