//! Canvas page layout
//!
//! Computes the nine-cell Business Model Canvas grid for a page:
//!
//! ```text
//! +------+------+------+------+------+
//! |      |  KA  |      |  CR  |      |
//! |  KP  +------+  VP  +------+  CS  |   top band, 60%
//! |      |  KR  |      |  CH  |      |
//! +------+------+--+---+------+------+
//! |       CostS    |     RevS        |   bottom band, 40%
//! +----------------+-----------------+
//! ```
//!
//! Layout is a pure function of the page geometry and the record. Drawing is
//! left to a [`DocumentRenderer`](crate::DocumentRenderer).

use crate::error::{ExportError, ExportResult};
use bmcanvas_core::{CanvasRecord, Section};
use serde::{Deserialize, Serialize};

/// Share of the content height given to the top band
const TOP_BAND_RATIO: f64 = 0.6;
/// Number of columns in the top band
const TOP_COLUMNS: f64 = 5.0;
/// Number of columns in the bottom band
const BOTTOM_COLUMNS: f64 = 2.0;

/// Page size and margin, in document units (millimetres by default)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageGeometry {
    /// Create a page geometry
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// A3 landscape, 420 x 297 mm with a 10 mm margin
    pub fn a3_landscape() -> Self {
        Self::new(420.0, 297.0, 10.0)
    }

    /// Width of the area inside the margins
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height of the area inside the margins
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Check that the page leaves a positive content area
    pub fn validate(&self) -> ExportResult<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.margin.is_finite();
        if !finite
            || self.width <= 0.0
            || self.height <= 0.0
            || self.margin < 0.0
            || self.content_width() <= 0.0
            || self.content_height() <= 0.0
        {
            return Err(ExportError::InvalidPage {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a3_landscape()
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Area shared with `other` (zero when they only touch)
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }
}

/// One section placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
    pub section: Section,
    pub title: &'static str,
    pub text: String,
    pub rect: Rect,
}

/// Lay out the nine canvas sections on `page`.
///
/// Cells are returned in canonical section order. Fails with
/// [`ExportError::InvalidPage`] when the page has no usable content area.
pub fn layout(record: &CanvasRecord, page: &PageGeometry) -> ExportResult<Vec<LayoutCell>> {
    page.validate()?;

    let m = page.margin;
    let content_w = page.content_width();
    let content_h = page.content_height();

    let top_h = content_h * TOP_BAND_RATIO;
    let bottom_h = content_h - top_h;
    let half_h = top_h / 2.0;
    let col_w = content_w / TOP_COLUMNS;
    let bottom_w = content_w / BOTTOM_COLUMNS;
    let col_x = |i: f64| m + col_w * i;
    let bottom_y = m + top_h;

    let placements = [
        (Section::KeyPartners, Rect::new(col_x(0.0), m, col_w, top_h)),
        (Section::KeyActivities, Rect::new(col_x(1.0), m, col_w, half_h)),
        (
            Section::KeyResources,
            Rect::new(col_x(1.0), m + half_h, col_w, half_h),
        ),
        (
            Section::ValueProposition,
            Rect::new(col_x(2.0), m, col_w, top_h),
        ),
        (
            Section::CustomerRelationships,
            Rect::new(col_x(3.0), m, col_w, half_h),
        ),
        (
            Section::Channels,
            Rect::new(col_x(3.0), m + half_h, col_w, half_h),
        ),
        (
            Section::CustomerSegments,
            Rect::new(col_x(4.0), m, col_w, top_h),
        ),
        (
            Section::CostStructure,
            Rect::new(m, bottom_y, bottom_w, bottom_h),
        ),
        (
            Section::RevenueStreams,
            Rect::new(m + bottom_w, bottom_y, bottom_w, bottom_h),
        ),
    ];

    let cells: Vec<LayoutCell> = placements
        .into_iter()
        .map(|(section, rect)| LayoutCell {
            section,
            title: section.title(),
            text: record.get(section).to_string(),
            rect,
        })
        .collect();

    tracing::debug!(
        cells = cells.len(),
        content_w,
        content_h,
        "Computed canvas layout"
    );
    Ok(cells)
}
