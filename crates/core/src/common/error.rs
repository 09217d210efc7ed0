//! Error definitions.
//!
//! Two families of failure exist:
//! 1. **Decode errors:** A bit string handed to the decoder violates its contract
//!    (empty, too wide, wrong word length, or containing something other than `0`/`1`).
//! 2. **Batch errors:** File-system and configuration failures at the batch boundary.
//!
//! An unknown opcode is *not* an error; it is rendered as the `Invalid opcode` line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for bit-string decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result alias for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// A bit string did not satisfy the decoder's input contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bit string was empty.
    #[error("empty bit field")]
    EmptyField,

    /// The bit string is wider than the 32 bits a field can hold.
    #[error("bit field of {width} bits does not fit in 32 bits")]
    FieldTooWide {
        /// Number of characters in the offending field.
        width: usize,
    },

    /// A character other than `0` or `1` was found.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Zero-based character position within the field.
        position: usize,
    },

    /// An instruction word was not exactly 32 characters long.
    #[error("instruction word must be 32 bits, got {len}")]
    WrongLength {
        /// Number of characters actually supplied.
        len: usize,
    },
}

/// Failure at the batch boundary (file access or configuration).
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BatchError {
    /// Classifies an I/O error raised while reading `path`.
    ///
    /// `NotFound` gets its own variant because the batch driver reports it
    /// differently from other read failures.
    pub fn reading(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Wraps an I/O error raised while writing `path`.
    pub fn writing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error means the input file is missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
