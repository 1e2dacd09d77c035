//! PDF page renderer
//!
//! Writes one landscape page with the standard Helvetica fonts, so no font
//! data is embedded. Layout coordinates are millimetres from the top-left
//! corner; PDF user space is points from the bottom-left, so every position
//! is scaled and flipped on the way out.

use crate::error::{ExportError, ExportResult};
use crate::layout::{LayoutCell, PageGeometry};
use crate::render::{DocumentRenderer, TextMetrics, PT_TO_MM};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// Resource name of the body font
const BODY_FONT: &[u8] = b"F1";
/// Resource name of the title font
const TITLE_FONT: &[u8] = b"F2";

/// Renders a canvas page as a single-page PDF
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    pub metrics: TextMetrics,
}

impl PdfRenderer {
    pub fn new(metrics: TextMetrics) -> Self {
        Self { metrics }
    }

    /// Content stream operations for the whole page
    fn page_operations(&self, page: &PageGeometry, cells: &[LayoutCell]) -> Vec<Operation> {
        let mut ops = vec![Operation::new(
            "w",
            vec![pt(self.metrics.border_width)],
        )];
        for cell in cells {
            self.cell_operations(page.height, cell, &mut ops);
        }
        ops
    }

    fn cell_operations(&self, page_height: f64, cell: &LayoutCell, ops: &mut Vec<Operation>) {
        let m = &self.metrics;
        let r = &cell.rect;

        // border
        ops.push(Operation::new(
            "re",
            vec![
                pt(r.x),
                pt(page_height - r.bottom()),
                pt(r.width),
                pt(r.height),
            ],
        ));
        ops.push(Operation::new("S", vec![]));

        // title
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(TITLE_FONT.to_vec()), real(m.title_font_pt)],
        ));
        ops.push(text_position(r.x + m.inset_x, page_height - (r.y + m.title_offset_y)));
        ops.push(Operation::new("Tj", vec![text_string(cell.title)]));
        ops.push(Operation::new("ET", vec![]));

        let lines = m.visible_lines(cell);
        if lines.is_empty() {
            return;
        }

        // body
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(BODY_FONT.to_vec()), real(m.body_font_pt)],
        ));
        for (i, line) in lines.iter().enumerate() {
            ops.push(text_position(
                r.x + m.inset_x,
                page_height - (r.y + m.body_baseline(i)),
            ));
            ops.push(Operation::new("Tj", vec![text_string(line)]));
        }
        ops.push(Operation::new("ET", vec![]));
    }

    fn build_document(&self, page: &PageGeometry, cells: &[LayoutCell]) -> ExportResult<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id: ObjectId = doc.new_object_id();

        let body_font = doc.add_object(standard_font("Helvetica"));
        let title_font = doc.add_object(standard_font("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => body_font,
                "F2" => title_font,
            },
        });

        let content = Content {
            operations: self.page_operations(page, cells),
        };
        let encoded = content.encode().map_err(render_error)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                real(0.0),
                real(0.0),
                pt(page.width),
                pt(page.height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal("Business Model Canvas"),
            "Producer" => Object::string_literal(concat!("bmcanvas ", env!("CARGO_PKG_VERSION"))),
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, page: &PageGeometry, cells: &[LayoutCell]) -> ExportResult<Vec<u8>> {
        let mut doc = self.build_document(page, cells)?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(render_error)?;
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}

fn render_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::Render(e.to_string())
}

fn standard_font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(base.as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Millimetres to PDF points
fn pt(mm: f64) -> Object {
    real(mm / PT_TO_MM)
}

/// Absolute text position; `x_mm`/`y_mm` are already flipped to PDF space
fn text_position(x_mm: f64, y_mm: f64) -> Operation {
    Operation::new(
        "Tm",
        vec![
            real(1.0),
            real(0.0),
            real(0.0),
            real(1.0),
            pt(x_mm),
            pt(y_mm),
        ],
    )
}

fn text_string(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

/// Encode text for the standard fonts' WinAnsi encoding.
///
/// Latin-1 maps straight through, common typographic punctuation maps to
/// its cp1252 slot and anything else becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '\t' => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}
