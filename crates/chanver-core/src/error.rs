//! Error taxonomy shared by release resolution and integrity checks.
//!
//! Verification outcomes (missing manifest, mismatch, ...) are not errors;
//! see [`crate::verify::VerificationOutcome`].

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Release feed unreachable or returned data we could not parse. Not retried.
    #[error("upstream: {message}")]
    Upstream { message: String },

    /// No release of `version` currently satisfies `channel`.
    #[error("no release of {version} found in channel '{channel}'")]
    ChannelNotFound { version: String, channel: String },

    /// Local file open/read failure.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A block read returned fewer bytes than the file size promised.
    #[error("{}: cannot read {expected} bytes, only {read} read", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        read: u64,
    },

    /// The hasher accepted fewer bytes than the block held.
    #[error("{}: cannot add {expected} bytes to hash, only {hashed} written", .path.display())]
    ShortHash {
        path: PathBuf,
        expected: u64,
        hashed: u64,
    },

    /// Configuration value rejected at load time.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    pub(crate) fn upstream(message: impl Into<String>) -> Self {
        Error::Upstream {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for local I/O failures (open, read, short read, short hash update).
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::Io { .. } | Error::ShortRead { .. } | Error::ShortHash { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
