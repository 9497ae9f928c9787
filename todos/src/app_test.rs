use super::*;
use crate::storage::{MemoryStorage, StorageError};

fn stored(storage: &MemoryStorage) -> Vec<Todo> {
    serde_json::from_str(&storage.raw(STORAGE_KEY).unwrap()).unwrap()
}

fn app_with(titles: &[&str]) -> (TodoApp<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let mut app = TodoApp::load(storage.clone());
    for title in titles {
        assert!(app.submit(title));
    }
    (app, storage)
}

// =============================================================
// load / new / reload
// =============================================================

#[test]
fn absent_slot_starts_empty() {
    let app = TodoApp::load(MemoryStorage::new());
    assert!(app.todos().is_empty());
    assert_eq!(app.filter(), Filter::All);
}

#[test]
fn malformed_slot_starts_empty() {
    let storage = MemoryStorage::new();
    storage.insert_raw(STORAGE_KEY, "definitely not json");
    let app = TodoApp::load(storage);
    assert!(app.todos().is_empty());
}

#[test]
fn loads_snapshot_written_by_earlier_build() {
    let storage = MemoryStorage::new();
    storage.insert_raw(
        STORAGE_KEY,
        r#"[{"id":"1","title":"Buy milk","isCompleted":false},{"id":"2","title":"Jog","isCompleted":true}]"#,
    );
    let app = TodoApp::load(storage);
    assert_eq!(app.todos().len(), 2);
    assert_eq!(app.todos()[0].title, "Buy milk");
    assert!(app.todos()[1].is_completed);
}

#[test]
fn decodable_snapshot_is_taken_as_stored() {
    let storage = MemoryStorage::new();
    storage.insert_raw(
        STORAGE_KEY,
        r#"[{"id":"x","title":"","isCompleted":false},{"id":"x","title":"dup","isCompleted":false}]"#,
    );
    let mut app = TodoApp::load(storage);
    assert_eq!(app.todos().len(), 2);
    assert_eq!(app.todos()[0].title, "");

    app.toggle_completed("x");
    assert!(app.todos().iter().all(|t| t.is_completed));
}

#[test]
fn new_defers_read_until_reload() {
    let (_, storage) = app_with(&["saved"]);
    let mut app = TodoApp::new(storage);
    assert!(app.todos().is_empty());
    app.reload();
    assert_eq!(app.todos()[0].title, "saved");
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_and_persists() {
    let (app, storage) = app_with(&["Buy milk", "Walk dog"]);
    let titles: Vec<_> = app.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Buy milk", "Walk dog"]);
    assert_eq!(stored(&storage), app.todos());
}

#[test]
fn submit_stores_title_as_typed() {
    let (app, storage) = app_with(&["  Buy milk  "]);
    assert_eq!(app.todos()[0].title, "  Buy milk  ");
    assert_eq!(stored(&storage)[0].title, "  Buy milk  ");
}

#[test]
fn blank_submit_is_rejected_without_writing() {
    let storage = MemoryStorage::new();
    let mut app = TodoApp::load(storage.clone());
    assert!(!app.submit(""));
    assert!(!app.submit("   "));
    assert!(app.todos().is_empty());
    assert!(storage.raw(STORAGE_KEY).is_none());
}

// =============================================================
// toggle / delete / clear
// =============================================================

#[test]
fn toggle_then_filter_scenario() {
    let (mut app, storage) = app_with(&["Buy milk"]);
    let id = app.todos()[0].id.clone();

    app.toggle_completed(&id);
    assert!(app.todos()[0].is_completed);
    assert!(stored(&storage)[0].is_completed);

    app.set_filter(Filter::Completed);
    assert_eq!(app.visible().len(), 1);
    assert!(app.has_visible());
    app.set_filter(Filter::Active);
    assert!(app.visible().is_empty());
    assert!(!app.has_visible());
    assert_eq!(app.empty_message(), "There's no active todo yet");
}

#[test]
fn delete_removes_and_persists() {
    let (mut app, storage) = app_with(&["a", "b"]);
    let id = app.todos()[0].id.clone();
    app.delete(&id);
    assert_eq!(app.todos().len(), 1);
    assert_eq!(app.todos()[0].title, "b");
    assert_eq!(stored(&storage), app.todos());
}

#[test]
fn unknown_id_leaves_list_unchanged() {
    let (mut app, _) = app_with(&["a"]);
    let before = app.todos().to_vec();
    app.toggle_completed("missing");
    app.delete("missing");
    assert_eq!(app.todos(), before);
}

#[test]
fn clear_completed_keeps_incomplete() {
    let (mut app, storage) = app_with(&["keep", "drop"]);
    let id = app.todos()[1].id.clone();
    app.toggle_completed(&id);

    app.clear_completed();
    assert_eq!(app.todos().len(), 1);
    assert_eq!(app.todos()[0].title, "keep");
    assert_eq!(stored(&storage).len(), 1);
}

// =============================================================
// filter and labels
// =============================================================

#[test]
fn filter_is_not_persisted() {
    let (mut app, storage) = app_with(&["a"]);
    app.set_filter(Filter::Completed);
    let reloaded = TodoApp::load(storage);
    assert_eq!(reloaded.filter(), Filter::All);
}

#[test]
fn items_left_counts_every_todo() {
    let (mut app, _) = app_with(&[]);
    assert_eq!(app.items_left_label(), "0 item left");
    app.submit("a");
    assert_eq!(app.items_left_label(), "1 item left");
    app.submit("b");
    let id = app.todos()[0].id.clone();
    app.toggle_completed(&id);
    assert_eq!(app.items_left_label(), "2 items left");
}

#[test]
fn empty_message_for_all_filter() {
    let app = TodoApp::load(MemoryStorage::new());
    assert_eq!(app.empty_message(), "There's no todo yet");
}

// =============================================================
// write failures
// =============================================================

#[test]
fn quota_failure_keeps_in_memory_list() {
    let storage = MemoryStorage::with_quota(120);
    let mut app = TodoApp::load(storage.clone());

    assert!(app.submit("short"));
    let saved = stored(&storage);
    assert_eq!(saved.len(), 1);

    assert!(app.submit("a title long enough to push the snapshot past the quota"));
    assert_eq!(app.todos().len(), 2);
    assert_eq!(stored(&storage), saved);

    let err = crate::store::write_slot(&storage, STORAGE_KEY, &app.todos()).unwrap_err();
    assert!(matches!(err, StorageError::Write { .. }));
}
