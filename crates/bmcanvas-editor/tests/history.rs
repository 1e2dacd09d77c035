use bmcanvas_core::{CanvasRecord, Section};
use bmcanvas_editor::{HistoryManager, VersionStore};
use std::collections::HashSet;

fn record(text: &str) -> CanvasRecord {
    CanvasRecord::new().with(Section::KeyPartners, text)
}

#[test]
fn test_undo_redo_round_trip() {
    let mut history = HistoryManager::new();
    let a = record("a");
    let b = record("b");

    history.record_checkpoint(a.clone());
    let restored = history.undo(b.clone()).expect("undo");
    assert_eq!(restored, a);
    assert!(history.can_redo());

    let again = history.redo(restored).expect("redo");
    assert_eq!(again, b);
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut history = HistoryManager::new();
    assert!(!history.can_undo());
    assert!(history.undo(record("live")).is_none());
    assert_eq!(history.redo_depth(), 0);
    assert!(history.redo(record("live")).is_none());
    assert_eq!(history.undo_depth(), 0);
}

#[test]
fn test_checkpoint_keeps_redo_stack() {
    let mut history = HistoryManager::new();
    history.record_checkpoint(record("a"));
    history.undo(record("b"));
    assert_eq!(history.redo_depth(), 1);

    history.record_checkpoint(record("c"));
    assert_eq!(history.redo_depth(), 1);
    assert_eq!(history.redo(record("d")), Some(record("b")));
}

#[test]
fn test_multiple_undo_order() {
    let mut history = HistoryManager::new();
    for text in ["one", "two", "three"] {
        history.record_checkpoint(record(text));
    }
    let mut live = record("four");
    let mut seen = Vec::new();
    while let Some(previous) = history.undo(live.clone()) {
        live = previous;
        seen.push(live.get(Section::KeyPartners).to_string());
    }
    assert_eq!(seen, vec!["three", "two", "one"]);
    assert_eq!(history.redo_depth(), 3);
}

#[test]
fn test_clear() {
    let mut history = HistoryManager::new();
    history.record_checkpoint(record("a"));
    history.undo(record("b"));
    history.record_checkpoint(record("c"));
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_version_ids_are_unique() {
    let mut store = VersionStore::new();
    for _ in 0..10_000 {
        store.snapshot(CanvasRecord::new());
    }
    let ids: HashSet<&str> = store.versions().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn test_versions_are_append_only() {
    let mut store = VersionStore::new();
    let first = store.snapshot(record("first"));
    let second = store.snapshot(record("second"));

    assert_eq!(store.len(), 2);
    assert_eq!(store.versions()[0], first);
    assert_eq!(store.latest(), Some(&second));
    assert!(first.timestamp <= second.timestamp);
    assert_eq!(store.get(&first.id).map(|v| v.restore()), Some(record("first")));
    assert!(store.get("missing").is_none());
}
