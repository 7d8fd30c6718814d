//! filetab-core: Core library for file size and digest tables
//!
//! Walks a directory tree, hashes every regular file it finds with MD5,
//! and collects the results into an insertion-ordered table keyed by path.
//! The table can then be rendered as a plain-text report, one
//! `<path> <size> <digest>` line per file.

pub mod error;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use error::ScanError;
pub use report::{format_record, write_report};
pub use scanner::{hash_bytes, hash_file, FileRecord, ScanTable, Scanner, DEFAULT_ROOT};
