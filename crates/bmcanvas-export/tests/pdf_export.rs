use bmcanvas_core::{CanvasRecord, Section};
use bmcanvas_export::{
    export_to_file, layout, DocumentRenderer, PageGeometry, PdfRenderer, PT_TO_MM,
};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object};

fn render(record: &CanvasRecord) -> Vec<u8> {
    let page = PageGeometry::a3_landscape();
    let cells = layout(record, &page).expect("layout");
    PdfRenderer::default().render(&page, &cells).expect("render")
}

fn page_operations(bytes: &[u8]) -> Vec<Operation> {
    let doc = Document::load_mem(bytes).expect("parse pdf");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    let page_id = *pages.values().next().expect("one page");
    let data = doc.get_page_content(page_id).expect("page content");
    Content::decode(&data).expect("decode content").operations
}

fn num(object: &Object) -> f64 {
    match object {
        Object::Real(v) => *v as f64,
        Object::Integer(i) => *i as f64,
        other => panic!("not a number: {:?}", other),
    }
}

fn shown_text(ops: &[Operation]) -> Vec<Vec<u8>> {
    ops.iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_render_produces_single_page_pdf() {
    let bytes = render(&CanvasRecord::new());
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let ops = page_operations(&bytes);
    assert_eq!(ops.iter().filter(|op| op.operator == "re").count(), 9);

    let titles: Vec<Vec<u8>> = Section::ALL
        .into_iter()
        .map(|s| s.title().as_bytes().to_vec())
        .collect();
    assert_eq!(shown_text(&ops), titles, "empty canvas shows only titles");
}

#[test]
fn test_first_cell_geometry() {
    let ops = page_operations(&render(&CanvasRecord::new()));

    // Key Partners: x 10 mm, bottom edge 297 - (10 + 166.2) mm from the page foot
    let border = ops.iter().find(|op| op.operator == "re").expect("border");
    let mm: Vec<f64> = border.operands.iter().map(|o| num(o) * PT_TO_MM).collect();
    assert!((mm[0] - 10.0).abs() < 0.01);
    assert!((mm[1] - 120.8).abs() < 0.01);
    assert!((mm[2] - 80.0).abs() < 0.01);
    assert!((mm[3] - 166.2).abs() < 0.01);

    // bold 12 pt title baseline at (x + 5, y + 10)
    let font = ops.iter().find(|op| op.operator == "Tf").expect("font");
    assert_eq!(font.operands[0], Object::Name(b"F2".to_vec()));
    assert!((num(&font.operands[1]) - 12.0).abs() < 1e-6);

    let position = ops.iter().find(|op| op.operator == "Tm").expect("position");
    assert!((num(&position.operands[4]) * PT_TO_MM - 15.0).abs() < 0.01);
    assert!((num(&position.operands[5]) * PT_TO_MM - 277.0).abs() < 0.01);
}

#[test]
fn test_body_text_wraps_and_clips() {
    let long = (0..500).map(|i| format!("line{}\n", i)).collect::<String>();
    let record = CanvasRecord::new()
        .with(Section::Channels, "Farmers markets")
        .with(Section::KeyActivities, long);
    let ops = page_operations(&render(&record));
    let text = shown_text(&ops);

    assert!(text.contains(&b"Farmers markets".to_vec()));
    assert!(text.contains(&b"line0".to_vec()));
    assert!(!text.contains(&b"line499".to_vec()));

    let page = PageGeometry::a3_landscape();
    let cells = layout(&record, &page).expect("layout");
    let max_lines = PdfRenderer::default()
        .metrics
        .lines_per_cell(cells[Section::KeyActivities.index()].rect.height);
    let shown = text.iter().filter(|t| t.starts_with(b"line")).count();
    assert_eq!(shown, max_lines);
}

#[test]
fn test_non_latin_text_is_replaced() {
    let record = CanvasRecord::new().with(Section::RevenueStreams, "Café ☕");
    let ops = page_operations(&render(&record));
    assert!(shown_text(&ops).contains(&b"Caf\xe9 ?".to_vec()));
}

#[test]
fn test_export_pdf_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = PdfRenderer::default();
    let path = dir.path().join(format!("canvas.{}", renderer.extension()));
    let record = CanvasRecord::new().with(Section::ValueProposition, "Fast delivery");

    export_to_file(&record, &PageGeometry::a3_landscape(), &renderer, &path).expect("export");

    let bytes = std::fs::read(&path).expect("read back");
    assert!(path.extension().is_some_and(|ext| ext == "pdf"));
    assert!(shown_text(&page_operations(&bytes)).contains(&b"Fast delivery".to_vec()));
}
