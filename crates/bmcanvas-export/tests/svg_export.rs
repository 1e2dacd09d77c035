use bmcanvas_core::{CanvasRecord, Section};
use bmcanvas_export::{
    export_to_file, layout, DocumentRenderer, ExportError, LayoutCell, PageGeometry, SvgRenderer,
};

fn render(renderer: &SvgRenderer, page: &PageGeometry, cells: &[LayoutCell]) -> String {
    let bytes = renderer.render(page, cells).expect("render");
    String::from_utf8(bytes).expect("utf-8 svg")
}

#[test]
fn test_render_contains_every_title_and_border() {
    let page = PageGeometry::a3_landscape();
    let cells = layout(&CanvasRecord::new(), &page).expect("layout");
    let svg = render(&SvgRenderer::default(), &page, &cells);

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"width="420mm" height="297mm" viewBox="0 0 420 297""#));
    for section in Section::ALL {
        assert!(svg.contains(&format!(">{}</text>", section.title())));
    }
    assert_eq!(svg.matches(r#"fill="none" stroke="black""#).count(), 9);
    assert!(!svg.contains("<tspan"), "empty canvas has no body text");
}

#[test]
fn test_render_escapes_body_text() {
    let page = PageGeometry::a3_landscape();
    let record = CanvasRecord::new().with(Section::KeyResources, "R&D <lab>");
    let cells = layout(&record, &page).expect("layout");
    let svg = render(&SvgRenderer::default(), &page, &cells);

    assert!(svg.contains("R&amp;D &lt;lab&gt;"));
    assert!(!svg.contains("<lab>"));
}

#[test]
fn test_overflowing_text_is_clipped_to_cell() {
    let page = PageGeometry::a3_landscape();
    let long = (0..500).map(|i| format!("line{}\n", i)).collect::<String>();
    let record = CanvasRecord::new().with(Section::KeyActivities, long);
    let cells = layout(&record, &page).expect("layout");
    let renderer = SvgRenderer::default();
    let svg = render(&renderer, &page, &cells);

    let cell = &cells[Section::KeyActivities.index()];
    let max_lines = renderer.metrics.lines_per_cell(cell.rect.height);
    assert!(max_lines > 0);
    assert_eq!(svg.matches("<tspan").count(), max_lines);
    assert!(svg.contains(">line0</tspan>"));
    assert!(!svg.contains(">line499</tspan>"));
}

#[test]
fn test_extension() {
    assert_eq!(SvgRenderer::default().extension(), "svg");
}

#[test]
fn test_export_to_file_writes_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("canvas.svg");
    let record = CanvasRecord::new().with(Section::ValueProposition, "Fast delivery");

    export_to_file(
        &record,
        &PageGeometry::a3_landscape(),
        &SvgRenderer::default(),
        &path,
    )
    .expect("export");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.contains(">Fast delivery</tspan>"));
    assert!(written.trim_end().ends_with("</svg>"));
}

#[test]
fn test_export_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("canvas.svg");
    let err = export_to_file(
        &CanvasRecord::new(),
        &PageGeometry::a3_landscape(),
        &SvgRenderer::default(),
        &path,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(!path.exists());
}

#[test]
fn test_export_rejects_invalid_page_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("canvas.svg");
    let err = export_to_file(
        &CanvasRecord::new(),
        &PageGeometry::new(420.0, 297.0, 200.0),
        &SvgRenderer::default(),
        &path,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::InvalidPage { .. }));
    assert!(!path.exists());
}
