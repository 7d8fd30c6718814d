//! Report rendering: one `<path> <size> <digest>` line per file

use std::io::{self, Write};

use crate::scanner::{FileRecord, ScanTable};

/// Format a single report line (without the trailing newline)
#[must_use]
pub fn format_record(record: &FileRecord) -> String {
    record.to_string()
}

/// Write every record of the table, in table order, one per line
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(table: &ScanTable, mut out: W) -> io::Result<()> {
    for record in table {
        writeln!(out, "{record}")?;
    }
    out.flush()
}
