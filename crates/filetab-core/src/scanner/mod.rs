//! Scanner module: File discovery, content hashing and the result table
//!
//! Responsible for walking directories, hashing each regular file,
//! and recording `(size, digest)` per path in traversal order.

mod hash;
mod table;
mod walker;

pub use hash::{hash_bytes, hash_file};
pub use table::{FileRecord, ScanTable};
pub use walker::{Scanner, DEFAULT_ROOT};
