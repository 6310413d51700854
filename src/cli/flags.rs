use uniqpass::Config;

use super::CliError;

/// Default for `-count` when it is not given.
pub const DEFAULT_COUNT: i64 = 1;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub digits: bool,
    pub lower: bool,
    pub upper: bool,
    pub length: Option<i64>,
    pub length_short: Option<i64>,
    pub count: Option<i64>,
}

impl CliFlags {
    /// `-length` wins over `-l`; a zero in either counts as not given.
    pub fn length(&self) -> Option<i64> {
        self.length
            .filter(|&n| n != 0)
            .or(self.length_short.filter(|&n| n != 0))
    }

    pub fn count(&self) -> i64 {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Check the flags and turn them into a generator config plus batch size.
    pub fn into_request(self) -> Result<(Config, usize), CliError> {
        let length = match self.length() {
            Some(n) if n > 0 => n as usize,
            _ => {
                return Err(CliError::Usage(
                    "a password length must be given with -length or -l",
                ));
            }
        };

        if !(self.digits || self.lower || self.upper) {
            return Err(CliError::Usage(
                "at least one character set must be selected (-digits, -lower or -upper)",
            ));
        }

        let count = match self.count() {
            n if n > 0 => n as usize,
            _ => return Err(CliError::Usage("-count must be a positive number")),
        };

        let config = Config {
            length,
            use_digits: self.digits,
            use_lower: self.lower,
            use_upper: self.upper,
        };
        Ok((config, count))
    }
}
