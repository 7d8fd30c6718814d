//! Logging setup
//!
//! Log output goes to stderr so that stdout carries only the report.

use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is not set
#[must_use]
pub const fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the filter from `RUST_LOG`, falling back to [`default_level`]
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Install the global subscriber
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(build_filter(verbose))
        .init();
}
