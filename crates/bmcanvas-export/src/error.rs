//! Error types for the export crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting a canvas.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The page geometry leaves no drawable area.
    #[error("Invalid page geometry: {width}x{height} with margin {margin}")]
    InvalidPage {
        width: f64,
        height: f64,
        margin: f64,
    },

    /// The document could not be written.
    #[error("Failed to write export '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The renderer could not produce the document.
    #[error("Failed to render document: {0}")]
    Render(String),

    /// No renderer exists for the requested format.
    #[error("Unknown document format: {0} (expected pdf or svg)")]
    UnknownFormat(String),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_display() {
        let err = ExportError::InvalidPage {
            width: 0.0,
            height: 297.0,
            margin: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid page geometry: 0x297 with margin 10"
        );

        let err = ExportError::UnknownFormat("png".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown document format: png (expected pdf or svg)"
        );
    }
}
