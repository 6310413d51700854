//! Diagnostics go to stderr so stdout carries nothing but passwords.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "UNIQPASS_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
