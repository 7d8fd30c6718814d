//! Scan command: Hash every file under a directory and print the table

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use filetab_core::{write_report, Scanner};
use tracing::debug;

/// Run the scan command, printing the report to stdout
///
/// # Errors
/// Returns an error if scanning fails or stdout cannot be written.
pub fn run(root: &Path, sorted: bool) -> Result<()> {
    let stdout = io::stdout();
    run_with_writer(root, sorted, stdout.lock())
}

/// Run the scan command, writing the report to `out`
///
/// Nothing is written unless the whole tree was scanned successfully.
///
/// # Errors
/// Returns an error if scanning fails or `out` cannot be written.
pub fn run_with_writer<W: Write>(root: &Path, sorted: bool, out: W) -> Result<()> {
    let scanner = Scanner::new(root).with_sorted(sorted);
    let table = scanner
        .scan()
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    debug!("Writing report for {} files", table.len());
    write_report(&table, out).context("Failed to write report")?;
    Ok(())
}
