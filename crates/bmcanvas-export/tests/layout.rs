use bmcanvas_core::{CanvasRecord, Section};
use bmcanvas_export::{layout, ExportError, PageGeometry, Rect};

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn test_nine_cells_in_canonical_order() {
    let cells = layout(&CanvasRecord::new(), &PageGeometry::a3_landscape()).expect("layout");
    let sections: Vec<Section> = cells.iter().map(|c| c.section).collect();
    assert_eq!(sections, Section::ALL.to_vec());
    for cell in &cells {
        assert_eq!(cell.title, cell.section.title());
    }
}

#[test]
fn test_a3_cells_tile_content_area() {
    let page = PageGeometry::new(420.0, 297.0, 10.0);
    let cells = layout(&CanvasRecord::new(), &page).expect("layout");
    let content = Rect::new(10.0, 10.0, 400.0, 277.0);

    let total: f64 = cells.iter().map(|c| c.rect.area()).sum();
    let expected = 400.0 * 277.0;
    assert!(
        (total - expected).abs() < 1e-6 * expected,
        "total area {}",
        total
    );

    for cell in &cells {
        let r = cell.rect;
        assert!(r.width > 0.0 && r.height > 0.0);
        assert!(r.x >= content.x - EPS && r.right() <= content.right() + EPS);
        assert!(r.y >= content.y - EPS && r.bottom() <= content.bottom() + EPS);
    }

    for (i, a) in cells.iter().enumerate() {
        for b in cells.iter().skip(i + 1) {
            let overlap = a.rect.overlap_area(&b.rect);
            assert!(
                overlap < EPS,
                "{} overlaps {} by {}",
                a.section,
                b.section,
                overlap
            );
        }
    }
}

#[test]
fn test_a3_band_geometry() {
    let cells = layout(&CanvasRecord::new(), &PageGeometry::a3_landscape()).expect("layout");
    let rect = |s: Section| cells[s.index()].rect;

    let top_h = 277.0 * 0.6;
    let bottom_h = 277.0 - top_h;

    let kp = rect(Section::KeyPartners);
    assert!(approx(kp.x, 10.0) && approx(kp.y, 10.0));
    assert!(approx(kp.width, 80.0) && approx(kp.height, top_h));

    let ka = rect(Section::KeyActivities);
    let kr = rect(Section::KeyResources);
    assert!(approx(ka.x, 90.0) && approx(ka.height, top_h / 2.0));
    assert!(approx(kr.y, ka.bottom()) && approx(kr.bottom(), 10.0 + top_h));

    let vp = rect(Section::ValueProposition);
    assert!(approx(vp.x, 170.0) && approx(vp.height, top_h));

    let cr = rect(Section::CustomerRelationships);
    let ch = rect(Section::Channels);
    assert!(approx(cr.x, 250.0) && approx(ch.x, 250.0));
    assert!(approx(ch.y, cr.bottom()));

    let cs = rect(Section::CustomerSegments);
    assert!(approx(cs.x, 330.0) && approx(cs.right(), 410.0));

    let cost = rect(Section::CostStructure);
    let rev = rect(Section::RevenueStreams);
    assert!(approx(cost.x, 10.0) && approx(cost.y, 10.0 + top_h));
    assert!(approx(cost.width, 200.0) && approx(cost.height, bottom_h));
    assert!(approx(rev.x, 210.0) && approx(rev.right(), 410.0));
    assert!(approx(rev.bottom(), 287.0));
}

#[test]
fn test_cells_carry_record_text() {
    let record = CanvasRecord::new()
        .with(Section::Channels, "Retail stores")
        .with(Section::CostStructure, "Rent\nSalaries");
    let cells = layout(&record, &PageGeometry::a3_landscape()).expect("layout");
    for cell in &cells {
        assert_eq!(cell.text, record.get(cell.section));
    }
}

#[test]
fn test_layout_is_deterministic() {
    let record = CanvasRecord::new().with(Section::KeyPartners, "x");
    let page = PageGeometry::new(297.0, 210.0, 7.5);
    assert_eq!(layout(&record, &page).unwrap(), layout(&record, &page).unwrap());
}

#[test]
fn test_invalid_page_fails_fast() {
    for page in [
        PageGeometry::new(0.0, 297.0, 10.0),
        PageGeometry::new(420.0, 0.0, 10.0),
        PageGeometry::new(-420.0, 297.0, 10.0),
        PageGeometry::new(420.0, 297.0, 150.0),
    ] {
        let err = layout(&CanvasRecord::new(), &page).unwrap_err();
        assert!(matches!(err, ExportError::InvalidPage { .. }));
    }
}
