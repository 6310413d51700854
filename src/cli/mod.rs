//! Command-line front end: flags in, passwords out.

mod flags;
mod help;
mod parse;
pub mod prompts;

use std::io::{self, BufWriter, Write};

use tracing::debug;
use uniqpass::{Generator, PassError};
use zeroize::Zeroize;

pub use flags::CliFlags;
pub use help::write_usage;
pub use parse::{ParseError, parse};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Usage(&'static str),
    #[error(transparent)]
    Generate(#[from] PassError),
    #[error("failed to write passwords")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Input mistakes get the usage text printed after the message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::Parse(_) | CliError::Usage(_))
    }
}

/// Program name for usage examples.
pub fn program(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("uniqpass")
}

pub fn run(args: &[String]) -> Result<(), CliError> {
    let flags = parse(args)?;

    if flags.help {
        write_usage(&mut io::stdout().lock(), program(args))?;
        return Ok(());
    }
    if flags.version {
        writeln!(io::stdout().lock(), "uniqpass {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let (config, count) = flags.into_request()?;
    debug!(
        length = config.length,
        digits = config.use_digits,
        lower = config.use_lower,
        upper = config.use_upper,
        count,
        "request parsed"
    );

    let mut generator = Generator::new(&config)?;
    let mut passwords = generator.generate_unique(count)?;

    let written = write_passwords(&mut BufWriter::new(io::stdout().lock()), &passwords);
    passwords.zeroize();
    Ok(written?)
}

/// One password per line.
fn write_passwords(out: &mut impl Write, passwords: &[String]) -> io::Result<()> {
    for password in passwords {
        writeln!(out, "{password}")?;
    }
    out.flush()
}
