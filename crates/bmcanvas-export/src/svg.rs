//! SVG page renderer
//! Draws a computed canvas layout as a single landscape SVG page:
//! - Bordered rectangle per section
//! - Bold section title at a fixed offset from the cell corner
//! - Word-wrapped body text below the title, clipped to the cell

use crate::error::ExportResult;
use crate::layout::{LayoutCell, PageGeometry};
use crate::render::{DocumentRenderer, TextMetrics, PT_TO_MM};
use std::fmt::Write as _;

/// Renders a canvas page as SVG with millimetre units
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub metrics: TextMetrics,
}

impl SvgRenderer {
    pub fn new(metrics: TextMetrics) -> Self {
        Self { metrics }
    }

    /// Render to SVG markup
    pub fn render_svg(&self, page: &PageGeometry, cells: &[LayoutCell]) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif">"#,
            w = page.width,
            h = page.height
        );
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            page.width, page.height
        );

        for cell in cells {
            self.render_cell(&mut out, cell);
        }

        out.push_str("</svg>\n");
        out
    }

    fn render_cell(&self, out: &mut String, cell: &LayoutCell) {
        let m = &self.metrics;
        let r = &cell.rect;

        let _ = writeln!(
            out,
            r#"  <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="none" stroke="black" stroke-width="{}"/>"#,
            r.x, r.y, r.width, r.height, m.border_width
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.3}" y="{:.3}" font-size="{:.3}" font-weight="bold">{}</text>"#,
            r.x + m.inset_x,
            r.y + m.title_offset_y,
            m.title_font_pt * PT_TO_MM,
            escape_xml(cell.title)
        );

        let lines = m.visible_lines(cell);
        if lines.is_empty() {
            return;
        }

        let _ = writeln!(
            out,
            r#"  <text font-size="{:.3}">"#,
            m.body_font_pt * PT_TO_MM
        );
        for (i, line) in lines.iter().enumerate() {
            let _ = writeln!(
                out,
                r#"    <tspan x="{:.3}" y="{:.3}">{}</tspan>"#,
                r.x + m.inset_x,
                r.y + m.body_baseline(i),
                escape_xml(line)
            );
        }
        out.push_str("  </text>\n");
    }
}

impl DocumentRenderer for SvgRenderer {
    fn render(&self, page: &PageGeometry, cells: &[LayoutCell]) -> ExportResult<Vec<u8>> {
        Ok(self.render_svg(page, cells).into_bytes())
    }

    fn extension(&self) -> &'static str {
        "svg"
    }
}

/// Escape text for use in XML character data and attributes
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
