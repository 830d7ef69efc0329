//! Logging infrastructure for Stride.
//!
//! Provides centralized tracing setup for the CLI. Log lines go to stderr so
//! that report text on stdout can be piped untouched.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default level for normal runs.
///
/// Failed records are already reported once each on stderr by the batch
/// report, so only warnings and errors about the run itself are logged.
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used when the user asks for progress output
pub const VERBOSE_LEVEL: &str = "debug";

/// Initialize logging for a normal run
///
/// RUST_LOG still takes precedence over the built-in level.
pub fn init(verbose: bool) {
    init_with_level(if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL })
}

/// Initialize logging with a specific default level
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(VERBOSE_LEVEL))
        .try_init();
}
