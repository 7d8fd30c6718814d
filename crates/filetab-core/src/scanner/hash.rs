//! Content hashing: MD5 digest and byte count of a file

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::{Result, ScanError};

const BUF_SIZE: usize = 64 * 1024;

/// Compute the size and MD5 digest of the file at `path`.
///
/// The file is read in fixed-size chunks; the digest is the same as hashing
/// the whole content at once. Size is the number of bytes actually read.
///
/// # Errors
/// Returns [`ScanError::Read`] if the file cannot be opened or read.
pub fn hash_file(path: &Path) -> Result<(u64, String)> {
    let read_error = |source: io::Error| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; BUF_SIZE];
    let mut size: u64 = 0;

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(read_error(e)),
        };
        size += n as u64;
        hasher.update(&buf[..n]);
    }

    Ok((size, format!("{:x}", hasher.finalize())))
}

/// MD5 digest of an in-memory buffer as lowercase hex
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}
