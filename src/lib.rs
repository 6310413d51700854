//! Unique password generation.
//!
//! Passwords are built from a configurable alphabet of digits, lowercase and
//! uppercase letters. No symbol repeats within a password, every selected
//! category appears at least once, and a [`Generator`] never hands out the
//! same password twice during its lifetime.
//!
//! ```no_run
//! use uniqpass::{Config, Generator};
//!
//! let config = Config::new(12).digits().lower().upper();
//! let mut generator = Generator::new(&config)?;
//! for password in generator.generate_unique(5)? {
//!     println!("{password}");
//! }
//! # Ok::<(), uniqpass::PassError>(())
//! ```

pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::PassError;
pub use pass::{Category, Charset, DEFAULT_MAX_ATTEMPTS, Generator};
pub use settings::Config;
