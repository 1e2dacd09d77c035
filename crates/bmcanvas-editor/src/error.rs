//! Error types for the editor crate.
//!
//! This module provides structured error types for the editing session:
//! file operations, export, and version restore.

use bmcanvas_core::CanvasError;
use bmcanvas_export::ExportError;
use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Reading or writing the canvas document failed.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Exporting the canvas failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// No version with this identifier exists.
    #[error("Version not found: {0}")]
    VersionNotFound(String),

    /// Save was requested but the canvas has never been saved to a file.
    #[error("Canvas has no file path; use save-as")]
    NoFilePath,
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
