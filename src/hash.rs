// src/hash.rs

//! Content hashing for the repository checksum sidecar
//!
//! Kodi polls `addons.xml.md5` before downloading `addons.xml` and only
//! refetches the index when the digest changes. The digest is an integrity
//! signal, not a security boundary, so MD5 is what the installer expects.

use crate::error::{Error, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read size used when streaming a file through the digest
pub const CHUNK_SIZE: usize = 4096;

/// Length of an MD5 digest rendered as lowercase hex
pub const HEX_LEN: usize = 32;

/// Incremental MD5 hasher producing lowercase hex output
pub struct Hasher {
    state: Md5,
    bytes: u64,
}

impl Hasher {
    pub fn new() -> Self {
        Self {
            state: Md5::new(),
            bytes: 0,
        }
    }

    /// Update the hasher with more data
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
        self.bytes += data.len() as u64;
    }

    /// Number of bytes fed so far
    #[inline]
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Finalize and return the hex digest
    pub fn finalize(self) -> String {
        format!("{:x}", self.state.finalize())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the digest of a byte slice
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Compute the digest of data from a reader, `CHUNK_SIZE` bytes at a time
pub fn hash_reader<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    debug!("Hashed {} bytes", hasher.bytes());
    Ok(hasher.finalize())
}

/// Compute the digest of a file on disk
///
/// The file is streamed, never loaded whole. Fails with [`Error::Read`] if
/// the file is missing or unreadable.
pub fn hash_file(path: &Path) -> Result<String> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    hash_reader(&mut file).map_err(read_err)
}
