//! Document renderers
//!
//! A renderer turns laid-out cells into the bytes of one page document.
//! Both backends share [`TextMetrics`], so titles, body lines and clipping
//! land in the same place whichever format is written.

use crate::error::{ExportError, ExportResult};
use crate::layout::{LayoutCell, PageGeometry};
use crate::pdf::PdfRenderer;
use crate::svg::SvgRenderer;
use crate::wrap::wrap_text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per typographic point
pub const PT_TO_MM: f64 = 25.4 / 72.0;

/// Draws laid-out cells into a document
pub trait DocumentRenderer {
    /// Render the full document
    fn render(&self, page: &PageGeometry, cells: &[LayoutCell]) -> ExportResult<Vec<u8>>;

    /// File extension of the produced document, without the dot
    fn extension(&self) -> &'static str;
}

/// Fonts, offsets and line metrics used when drawing a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Title font size in points
    pub title_font_pt: f64,
    /// Body font size in points
    pub body_font_pt: f64,
    /// Horizontal inset of title and body from the cell's left edge
    pub inset_x: f64,
    /// Title baseline offset from the cell's top edge
    pub title_offset_y: f64,
    /// Body top offset from the cell's top edge
    pub body_offset_y: f64,
    /// Distance between body lines
    pub line_height: f64,
    /// Average glyph width as a fraction of the font size
    pub avg_char_em: f64,
    /// Border stroke width
    pub border_width: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            title_font_pt: 12.0,
            body_font_pt: 10.0,
            inset_x: 5.0,
            title_offset_y: 10.0,
            body_offset_y: 15.0,
            line_height: 5.0,
            avg_char_em: 0.5,
            border_width: 0.3,
        }
    }
}

impl TextMetrics {
    /// How many body characters fit on one line of a cell `cell_width` wide
    pub fn chars_per_line(&self, cell_width: f64) -> usize {
        let usable = cell_width - 2.0 * self.inset_x;
        let glyph = self.body_font_pt * PT_TO_MM * self.avg_char_em;
        if usable <= 0.0 || glyph <= 0.0 {
            return 1;
        }
        ((usable / glyph).floor() as usize).max(1)
    }

    /// How many body lines fit below the title of a cell `cell_height` tall
    pub fn lines_per_cell(&self, cell_height: f64) -> usize {
        let usable = cell_height - self.body_offset_y;
        if usable <= 0.0 || self.line_height <= 0.0 {
            return 0;
        }
        (usable / self.line_height).floor() as usize
    }

    /// Baseline of body line `index`, measured down from the cell's top edge.
    ///
    /// Text sits vertically centred in its line box.
    pub fn body_baseline(&self, index: usize) -> f64 {
        self.body_offset_y
            + self.line_height * (index as f64 + 0.5)
            + 0.3 * self.body_font_pt * PT_TO_MM
    }

    /// Wrapped body lines of `cell` that fit inside it
    pub fn visible_lines(&self, cell: &LayoutCell) -> Vec<String> {
        let mut lines = wrap_text(&cell.text, self.chars_per_line(cell.rect.width));
        let max_lines = self.lines_per_cell(cell.rect.height);
        if lines.len() > max_lines {
            tracing::debug!(
                section = %cell.section,
                dropped = lines.len() - max_lines,
                "Section text overflows its cell"
            );
            lines.truncate(max_lines);
        }
        lines
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Pdf,
    Svg,
}

impl DocumentFormat {
    /// Renderer for this format
    pub fn renderer(self, metrics: TextMetrics) -> Box<dyn DocumentRenderer> {
        match self {
            Self::Pdf => Box::new(PdfRenderer::new(metrics)),
            Self::Svg => Box::new(SvgRenderer::new(metrics)),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Svg => write!(f, "svg"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "svg" => Ok(Self::Svg),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_capacity() {
        let m = TextMetrics::default();
        // 80 mm wide cell, 70 mm usable, 1.764 mm glyphs
        assert_eq!(m.chars_per_line(80.0), 39);
        assert_eq!(m.chars_per_line(5.0), 1);
        // 83.1 mm tall cell leaves 68.1 mm for body lines
        assert_eq!(m.lines_per_cell(83.1), 13);
        assert_eq!(m.lines_per_cell(10.0), 0);
    }

    #[test]
    fn test_body_baseline_inside_line_box() {
        let m = TextMetrics::default();
        let first = m.body_baseline(0);
        assert!(first > m.body_offset_y && first < m.body_offset_y + m.line_height);
        assert!((m.body_baseline(1) - first - m.line_height).abs() < 1e-9);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<DocumentFormat>().ok(), Some(DocumentFormat::Pdf));
        assert_eq!("SVG".parse::<DocumentFormat>().ok(), Some(DocumentFormat::Svg));
        assert!("png".parse::<DocumentFormat>().is_err());
        assert_eq!(DocumentFormat::default(), DocumentFormat::Pdf);
    }

    #[test]
    fn test_format_extension() {
        let metrics = TextMetrics::default();
        assert_eq!(DocumentFormat::Pdf.renderer(metrics).extension(), "pdf");
        assert_eq!(DocumentFormat::Svg.renderer(metrics).extension(), "svg");
    }
}
