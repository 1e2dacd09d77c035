//! Error handling for BMCanvas core
//!
//! Covers the failures that can happen while reading or writing a canvas
//! document. All variants are recoverable and reported to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Canvas document error type
#[derive(Error, Debug)]
pub enum CanvasError {
    /// The canvas file could not be read or written
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid canvas
    #[error("Malformed canvas document: {reason}")]
    Malformed {
        /// Why the document was rejected.
        reason: String,
    },

    /// The record could not be serialized
    #[error("Failed to serialize canvas: {0}")]
    Serialize(String),
}

impl CanvasError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CanvasError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-document error
    pub fn malformed(reason: impl Into<String>) -> Self {
        CanvasError::Malformed {
            reason: reason.into(),
        }
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, CanvasError::Io { .. })
    }

    /// Check if this is a malformed-document error
    pub fn is_malformed(&self) -> bool {
        matches!(self, CanvasError::Malformed { .. })
    }
}

/// Result type using CanvasError
pub type Result<T> = std::result::Result<T, CanvasError>;
