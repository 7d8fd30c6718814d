//! Errors that can occur while scanning a directory tree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a scan
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Read error for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
