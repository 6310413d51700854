//! Centralized error and usage messages for CLI output.

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Check if stderr is a tty
fn stderr_is_terminal() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

/// Print an error message to stderr, red when stderr is a terminal.
pub fn error(msg: &str) {
    if stderr_is_terminal() {
        eprintln!("{RED}error: {msg}{RESET}");
    } else {
        eprintln!("error: {msg}");
    }
}

/// Render an error and its `source()` chain as one line.
pub fn chain(err: &dyn std::error::Error) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniqpass::PassError;

    #[test]
    fn chain_joins_causes() {
        let err = PassError::Batch {
            index: 4,
            count: 9,
            source: Box::new(PassError::ExhaustedAttempts { attempts: 10 }),
        };
        let line = chain(&err);
        assert!(line.starts_with("failed to generate 9 unique passwords (request 5 of 9): "));
        assert!(line.ends_with("could not generate a unique password in 10 attempts, the combination space may be exhausted"));
    }
}
