//! filetab-cli library
//!
//! This module exposes the internal functionality of filetab-cli for testing purposes.

pub mod cli;
#[doc(hidden)]
pub mod commands;
pub mod logging;

pub use cli::Cli;
pub use logging::setup_logging;
