//! Error types for I/O operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// The source file could not be opened.
    #[error("{} not found: {source}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying open error.
        #[source]
        source: io::Error,
    },

    /// Input ended before the header or all pixel values were read.
    #[error("truncated input: expected {expected} tokens, found {found}")]
    Truncated {
        /// Number of tokens the header promised.
        expected: usize,
        /// Number of tokens actually present.
        found: usize,
    },

    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    IoFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying write error.
        #[source]
        source: io::Error,
    },

    /// A numeric token did not parse.
    #[error("malformed token '{token}': {reason}")]
    Malformed {
        /// Offending token text.
        token: String,
        /// Parser message.
        reason: String,
    },

    /// Stream I/O error while reading from or writing to a non-file handle.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoded values do not form a valid image.
    #[error(transparent)]
    Image(#[from] imgproc_core::Error),
}

impl IoError {
    /// Returns `true` for a missing or unreadable source file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` when the input ran out of tokens.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
