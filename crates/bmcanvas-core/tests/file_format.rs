use bmcanvas_core::{
    load_from_file, parse_document, save_to_file, to_document, CanvasRecord, Section,
};
use proptest::prelude::*;

fn sample_record() -> CanvasRecord {
    CanvasRecord::new()
        .with(Section::KeyPartners, "Suppliers\n  - roasters\n  - dairies")
        .with(Section::ValueProposition, "Fresh coffee\tdelivered")
        .with(Section::Channels, "   ")
        .with(Section::RevenueStreams, "Subscriptions ☕")
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("canvas.json");

    let record = sample_record();
    save_to_file(&record, &path).expect("save failed");
    let loaded = load_from_file(&path).expect("load failed");

    assert_eq!(loaded, record);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let doc = r#"{
        "keyPartners": "Banks",
        "notes": "not part of the canvas",
        "version": 3
    }"#;
    let record = parse_document(doc).expect("parse");
    assert_eq!(record.get(Section::KeyPartners), "Banks");
}

#[test]
fn test_missing_and_null_keys_default_to_empty() {
    let record = parse_document(r#"{"channels": null}"#).expect("parse");
    assert_eq!(record, CanvasRecord::new());
}

#[test]
fn test_non_string_value_is_malformed() {
    let err = parse_document(r#"{"channels": 42}"#).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_truncated_document_is_malformed() {
    let err = parse_document(r#"{"channels": "web"#).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_document_has_exactly_nine_keys() {
    let doc = to_document(&sample_record()).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&doc).expect("json");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), Section::COUNT);
    for section in Section::ALL {
        assert!(object.contains_key(section.key()), "missing {}", section.key());
    }
}

fn arb_record() -> impl Strategy<Value = CanvasRecord> {
    proptest::collection::vec(any::<String>(), Section::COUNT).prop_map(|texts| {
        let mut record = CanvasRecord::new();
        for (section, text) in Section::ALL.into_iter().zip(texts) {
            record.set(section, text);
        }
        record
    })
}

proptest! {
    #[test]
    fn prop_document_round_trip(record in arb_record()) {
        let doc = to_document(&record).unwrap();
        let parsed = parse_document(&doc).unwrap();
        prop_assert_eq!(parsed, record);
    }
}
