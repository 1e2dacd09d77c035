//! # BMCanvas Export
//!
//! Turns a canvas record into a printable page.
//!
//! ## Architecture
//!
//! ```text
//! CanvasRecord + PageGeometry
//!   └── layout()          pure geometry, nine LayoutCells
//!         └── DocumentRenderer (PdfRenderer, SvgRenderer)
//!               └── wrap_text()  word wrapping of section bodies
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bmcanvas_export::{export_to_file, PageGeometry, PdfRenderer};
//!
//! export_to_file(&record, &PageGeometry::a3_landscape(), &PdfRenderer::default(), "canvas.pdf")?;
//! ```

pub mod error;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod svg;
pub mod wrap;

pub use error::{ExportError, ExportResult};
pub use layout::{layout, LayoutCell, PageGeometry, Rect};
pub use pdf::PdfRenderer;
pub use render::{DocumentFormat, DocumentRenderer, TextMetrics, PT_TO_MM};
pub use svg::SvgRenderer;
pub use wrap::wrap_text;

use bmcanvas_core::CanvasRecord;
use std::path::Path;

/// Lay out `record` on `page`, render it, and write the document to `path`.
pub fn export_to_file(
    record: &CanvasRecord,
    page: &PageGeometry,
    renderer: &dyn DocumentRenderer,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    let path = path.as_ref();
    let cells = layout(record, page)?;
    let document = renderer.render(page, &cells)?;
    std::fs::write(path, document).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        format = renderer.extension(),
        width = page.width,
        height = page.height,
        "Canvas exported"
    );
    Ok(())
}
