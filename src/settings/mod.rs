//! Password generation settings.

use crate::error::PassError;

/// Which alphabets to draw from, and how long each password is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub use_digits: bool,
    pub use_lower: bool,
    pub use_upper: bool,
}

impl Config {
    /// A config of the given length with no character set selected yet.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn digits(mut self) -> Self {
        self.use_digits = true;
        self
    }

    pub fn lower(mut self) -> Self {
        self.use_lower = true;
        self
    }

    pub fn upper(mut self) -> Self {
        self.use_upper = true;
        self
    }

    /// Number of selected character sets.
    pub fn categories(&self) -> usize {
        [self.use_digits, self.use_lower, self.use_upper]
            .into_iter()
            .filter(|&on| on)
            .count()
    }

    pub fn validate(&self) -> Result<(), PassError> {
        if self.length == 0 {
            return Err(PassError::InvalidConfig(
                "password length must be a positive number",
            ));
        }

        if self.categories() == 0 {
            return Err(PassError::InvalidConfig(
                "at least one character set must be selected (digits, lower or upper)",
            ));
        }

        // Every selected set contributes one symbol, so they must fit.
        if self.length < self.categories() {
            return Err(PassError::InvalidConfig(
                "password length must be at least the number of selected character sets",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_rejected() {
        let err = Config::new(0).digits().validate().unwrap_err();
        assert!(matches!(err, PassError::InvalidConfig(_)));
    }

    #[test]
    fn no_category_is_rejected() {
        let err = Config::new(10).validate().unwrap_err();
        assert!(matches!(err, PassError::InvalidConfig(_)));
        assert!(err.to_string().contains("character set"));
    }

    #[test]
    fn length_below_category_count_is_rejected() {
        let err = Config::new(2).digits().lower().upper().validate().unwrap_err();
        assert!(matches!(err, PassError::InvalidConfig(_)));
    }

    #[test]
    fn valid_configs_pass() {
        assert!(Config::new(5).digits().validate().is_ok());
        assert!(Config::new(10).digits().lower().upper().validate().is_ok());
        assert!(Config::new(3).digits().lower().upper().validate().is_ok());
    }

    #[test]
    fn categories_counts_flags() {
        assert_eq!(Config::new(1).categories(), 0);
        assert_eq!(Config::new(1).lower().categories(), 1);
        assert_eq!(Config::new(1).digits().upper().categories(), 2);
    }
}
