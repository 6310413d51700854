//! Errors raised while configuring or running a generator.

use crate::pass::Category;
use crate::rand::RandError;

#[derive(Debug, thiserror::Error)]
pub enum PassError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("password length ({length}) exceeds the number of available unique symbols ({available})")]
    LengthExceedsCharset { length: usize, available: usize },

    #[error("no {category} symbols left to cover that character set")]
    InsufficientCategorySymbols { category: Category },

    #[error("not enough unique symbols: needed {needed}, only {available} available")]
    InsufficientSymbols { needed: usize, available: usize },

    #[error(
        "could not generate a unique password in {attempts} attempts, the combination space may be exhausted"
    )]
    ExhaustedAttempts { attempts: usize },

    #[error("password count must be a positive number")]
    InvalidCount,

    #[error("random number generation failed")]
    Random(#[from] RandError),

    #[error("failed to generate {count} unique passwords (request {} of {count})", .index + 1)]
    Batch {
        index: usize,
        count: usize,
        #[source]
        source: Box<PassError>,
    },
}

impl PassError {
    /// The underlying cause, with any batch context stripped.
    pub fn root(&self) -> &PassError {
        match self {
            PassError::Batch { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when uniqueness could not be met within the attempt bound.
    /// This is the one failure a caller can recover from by asking for less.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.root(), PassError::ExhaustedAttempts { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_unwraps_nested_batches() {
        let err = PassError::Batch {
            index: 3,
            count: 10,
            source: Box::new(PassError::ExhaustedAttempts { attempts: 100 }),
        };
        assert!(matches!(err.root(), PassError::ExhaustedAttempts { attempts: 100 }));
        assert!(err.is_exhausted());
        assert!(!PassError::InvalidCount.is_exhausted());
    }

    #[test]
    fn batch_message_is_one_based() {
        let err = PassError::Batch {
            index: 0,
            count: 2,
            source: Box::new(PassError::InvalidCount),
        };
        assert_eq!(
            err.to_string(),
            "failed to generate 2 unique passwords (request 1 of 2)"
        );
    }

    #[test]
    fn random_error_keeps_its_source() {
        use std::error::Error;

        let err = PassError::from(RandError::EmptyRange);
        assert!(err.source().is_some());
    }
}
