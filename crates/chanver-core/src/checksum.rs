//! SHA-256 of release artifacts, computed in fixed-size blocks.
//!
//! The file is read block by block (1 MiB by default) so memory use does not
//! depend on the artifact size. Every block must be read and hashed in full;
//! a short read or short hash update fails the call rather than producing a
//! digest of truncated content.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Default block size: 1 MiB.
pub const BLOCK_SIZE: usize = 1024 * 1024;

/// Computes SHA-256 digests with bounded-size reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkedHasher {
    block_size: usize,
}

impl Default for ChunkedHasher {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
        }
    }
}

impl ChunkedHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with a custom block size (zero is bumped to one byte).
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Digest of the file at `path` as lowercase hex.
    ///
    /// Exactly as many bytes as the file size reported at open time are hashed.
    pub fn sha256_path(&self, path: &Path) -> Result<String> {
        let mut f = File::open(path).map_err(|e| Error::io(path, e))?;
        let size = f.metadata().map_err(|e| Error::io(path, e))?.len();
        self.sha256_reader(&mut f, size, path)
    }

    /// Digest of the next `size` bytes of `reader`. `origin` only labels errors.
    pub fn sha256_reader<R: Read>(&self, reader: &mut R, size: u64, origin: &Path) -> Result<String> {
        let block = self.block_size as u64;
        let first = usize::try_from(size.min(block)).unwrap_or(self.block_size);
        let mut buf = vec![0u8; first];
        let mut hasher = Sha256::new();
        let mut remaining = size;
        let mut blocks = 0u64;

        while remaining > 0 {
            let expected = usize::try_from(remaining.min(block)).unwrap_or(self.block_size);
            let chunk = &mut buf[..expected];

            let read = fill_block(reader, chunk).map_err(|e| Error::io(origin, e))?;
            if read != expected {
                return Err(Error::ShortRead {
                    path: origin.to_path_buf(),
                    expected: expected as u64,
                    read: read as u64,
                });
            }

            let hashed = hasher.write(chunk).map_err(|e| Error::io(origin, e))?;
            if hashed != expected {
                return Err(Error::ShortHash {
                    path: origin.to_path_buf(),
                    expected: expected as u64,
                    hashed: hashed as u64,
                });
            }

            remaining -= expected as u64;
            blocks += 1;
        }

        tracing::debug!(path = %origin.display(), size, blocks, "hashed");
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Compute SHA-256 of a file with the default block size and return lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    ChunkedHasher::default().sha256_path(path)
}

/// Read until `buf` is full or the reader hits EOF; returns bytes read.
fn fill_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
