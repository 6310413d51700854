//! Exit handling: process hardening and mapping results to exit codes.

use std::io;
use std::process::ExitCode;

use crate::cli::{CliError, prompts, write_usage};

/// Keep generated secrets out of core dumps and ptrace attach.
pub fn harden_process() {
    #[cfg(target_os = "linux")]
    let _ = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

/// 0 on success. Any error is reported on stderr and exits 1.
pub fn code(result: Result<(), CliError>, program: &str) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            prompts::error(&prompts::chain(&err));
            if err.shows_usage() {
                eprintln!();
                let _ = write_usage(&mut io::stderr().lock(), program);
            }
            ExitCode::FAILURE
        }
    }
}
