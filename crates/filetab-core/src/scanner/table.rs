//! Result table: path -> (size, digest), kept in insertion order

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Size and digest recorded for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub digest: String,
}

impl FileRecord {
    /// Create a new record
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, size: u64, digest: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size,
            digest: digest.into(),
        }
    }
}

/// Renders as `<path> <size> <digest>`
impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.path.display(), self.size, self.digest)
    }
}

/// Records keyed by path, iterated in the order they were first inserted
#[derive(Debug, Clone, Default)]
pub struct ScanTable {
    records: Vec<FileRecord>,
    index: HashMap<PathBuf, usize>,
}

impl ScanTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced.
    ///
    /// A path that is already present keeps its original position.
    pub fn insert(&mut self, record: FileRecord) -> Option<FileRecord> {
        if let Some(&slot) = self.index.get(&record.path) {
            return Some(std::mem::replace(&mut self.records[slot], record));
        }
        self.index.insert(record.path.clone(), self.records.len());
        self.records.push(record);
        None
    }

    /// Look up the record for a path
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&FileRecord> {
        self.index.get(path).and_then(|&slot| self.records.get(slot))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all recorded sizes
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|r| r.size).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ScanTable {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
