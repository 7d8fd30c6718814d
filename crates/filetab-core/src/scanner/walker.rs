//! File walker: Discovers files in a directory tree and builds the scan table

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::hash::hash_file;
use super::table::{FileRecord, ScanTable};
use crate::error::{Result, ScanError};

/// Directory scanned when no root is given, relative to the working directory
pub const DEFAULT_ROOT: &str = "./testing";

/// Scanner for hashing every file below a root directory
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    sorted: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sorted: false,
        }
    }

    /// Visit entries of each directory in file name order instead of
    /// filesystem order
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Walk the tree depth-first and yield the path of every file below root.
    ///
    /// Paths are the root joined with each entry name. Directory links are
    /// not descended into; other links are yielded as files.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf>> {
        let mut walker = WalkDir::new(&self.root).min_depth(1);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        walker.into_iter().filter_map(|entry| match entry {
            Ok(entry) => is_file_entry(&entry).then(|| Ok(entry.into_path())),
            Err(e) => Some(Err(ScanError::from(e))),
        })
    }

    /// Hash every file below root and collect the results.
    ///
    /// # Errors
    /// Fails on the first problem: missing or non-directory root, an
    /// unreadable directory, or a file that cannot be read.
    pub fn scan(&self) -> Result<ScanTable> {
        self.check_root()?;
        info!("Scanning directory: {}", self.root.display());

        let mut table = ScanTable::new();
        for path in self.files() {
            let path = path?;
            let (size, digest) = hash_file(&path)?;
            debug!("Hashed {} ({} bytes): {}", path.display(), size, digest);
            table.insert(FileRecord { path, size, digest });
        }

        info!(
            "Scan completed: {} files, {} bytes",
            table.len(),
            table.total_size()
        );
        Ok(table)
    }

    fn check_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ScanError::RootNotDirectory(self.root.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ScanError::RootNotFound(self.root.clone()))
            }
            Err(source) => Err(ScanError::Read {
                path: self.root.clone(),
                source,
            }),
        }
    }
}

fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // Broken links count as files and fail when read
    file_type.is_symlink() && !entry.path().is_dir()
}
