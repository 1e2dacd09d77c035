//! Canvas file format
//!
//! A canvas is persisted as a UTF-8 JSON object with one string value per
//! section, keyed by [`Section::key`](crate::Section::key). Unknown keys are
//! ignored on load, missing keys and `null` values load as empty strings.

use crate::error::{CanvasError, Result};
use crate::record::CanvasRecord;
use serde::Serialize;
use std::path::Path;

/// Indentation used when writing canvas documents
const INDENT: &[u8] = b"    ";

/// Serialize a record to a pretty-printed canvas document
pub fn to_document(record: &CanvasRecord) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut serializer)
        .map_err(|e| CanvasError::Serialize(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| CanvasError::Serialize(e.to_string()))
}

/// Parse a canvas document
pub fn parse_document(content: &str) -> Result<CanvasRecord> {
    serde_json::from_str(content).map_err(|e| CanvasError::malformed(e.to_string()))
}

/// Write a record to `path`
pub fn save_to_file(record: &CanvasRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = to_document(record)?;
    std::fs::write(path, content).map_err(|e| CanvasError::io(path, e))?;
    tracing::info!(path = %path.display(), "Canvas saved");
    Ok(())
}

/// Read a record from `path`
pub fn load_from_file(path: impl AsRef<Path>) -> Result<CanvasRecord> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| CanvasError::io(path, e))?;
    let record = parse_document(&content)?;
    tracing::info!(
        path = %path.display(),
        filled = record.filled_count(),
        "Canvas loaded"
    );
    Ok(record)
}
