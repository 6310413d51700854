//! Password generation.

pub mod charset;
mod generate;

pub use charset::{Category, Charset, Group};
pub use generate::{DEFAULT_MAX_ATTEMPTS, Generator};
