use super::*;

fn sample() -> Vec<Todo> {
    vec![
        Todo::with_id("a", "Buy milk"),
        Todo::with_id("b", "Walk dog").toggled(),
        Todo::with_id("c", "Read book"),
        Todo::with_id("d", "File taxes").toggled(),
    ]
}

fn ids(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// normalize_title / create
// =============================================================

#[test]
fn normalize_title_trims_and_rejects_blank() {
    assert_eq!(normalize_title("  hi  "), Some("hi"));
    assert_eq!(normalize_title(""), None);
    assert_eq!(normalize_title(" \t\n "), None);
}

#[test]
fn create_appends_incomplete_todo() {
    for title in ["Buy milk", "x", "  padded  ", "emoji ✓"] {
        let before = sample();
        let after = create(&before, title);
        assert_eq!(after.len(), before.len() + 1);
        let added = after.last().unwrap();
        assert!(!added.is_completed);
        assert_eq!(added.title, title);
        assert_eq!(&after[..before.len()], &before[..]);
    }
}

#[test]
fn create_rejects_empty_and_whitespace_titles() {
    let before = sample();
    assert_eq!(create(&before, ""), before);
    assert_eq!(create(&before, "   "), before);
}

#[test]
fn create_keeps_surrounding_whitespace() {
    let list = create(&[], "  Buy milk  ");
    assert_eq!(list[0].title, "  Buy milk  ");
}

#[test]
fn create_generates_unique_ids() {
    let list = create(&create(&[], "one"), "two");
    assert_ne!(list[0].id, list[1].id);
}

// =============================================================
// toggle_completed
// =============================================================

#[test]
fn toggle_flips_only_the_target() {
    let before = sample();
    let after = toggle_completed(&before, "a");
    assert!(after[0].is_completed);
    assert_eq!(&after[1..], &before[1..]);
}

#[test]
fn double_toggle_restores_every_record() {
    let before = sample();
    for todo in &before {
        let twice = toggle_completed(&toggle_completed(&before, &todo.id), &todo.id);
        assert_eq!(twice, before);
    }
}

#[test]
fn toggle_unknown_id_is_noop() {
    let before = sample();
    assert_eq!(toggle_completed(&before, "missing"), before);
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_target_and_keeps_order() {
    let after = delete(&sample(), "b");
    assert_eq!(ids(&after), ["a", "c", "d"]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let before = sample();
    assert_eq!(delete(&before, "missing"), before);
}

// =============================================================
// clear_completed
// =============================================================

#[test]
fn clear_completed_keeps_only_active() {
    let after = clear_completed(&sample());
    assert_eq!(ids(&after), ["a", "c"]);
    assert!(after.iter().all(|t| !t.is_completed));
}

#[test]
fn clear_completed_is_idempotent() {
    let once = clear_completed(&sample());
    assert_eq!(clear_completed(&once), once);
}

// =============================================================
// filter
// =============================================================

#[test]
fn filter_all_is_identity() {
    let list = sample();
    assert_eq!(filter(&list, Filter::All), list);
}

#[test]
fn active_and_completed_partition_all() {
    let list = sample();
    let active = filter(&list, Filter::Active);
    let completed = filter(&list, Filter::Completed);

    assert_eq!(active.len() + completed.len(), list.len());
    assert!(active.iter().all(|t| !completed.contains(t)));
    assert!(list.iter().all(|t| active.contains(t) || completed.contains(t)));
    assert_eq!(ids(&active), ["a", "c"]);
    assert_eq!(ids(&completed), ["b", "d"]);
}

#[test]
fn filter_on_empty_list_is_empty() {
    for mode in Filter::VARIANTS {
        assert!(filter(&[], mode).is_empty());
    }
}

// =============================================================
// counters and labels
// =============================================================

#[test]
fn counts_split_by_completion() {
    let list = sample();
    assert_eq!(active_count(&list), 2);
    assert_eq!(completed_count(&list), 2);
}

#[test]
fn items_left_label_pluralizes_above_one() {
    assert_eq!(items_left_label(0), "0 item left");
    assert_eq!(items_left_label(1), "1 item left");
    assert_eq!(items_left_label(2), "2 items left");
}

// =============================================================
// scenarios
// =============================================================

#[test]
fn buy_milk_scenario() {
    let list = create(&[], "Buy milk");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Buy milk");
    assert!(!list[0].is_completed);

    let id = list[0].id.clone();
    let list = toggle_completed(&list, &id);
    assert!(list[0].is_completed);

    assert_eq!(filter(&list, Filter::Completed), list);
    assert!(filter(&list, Filter::Active).is_empty());
}

#[test]
fn clear_completed_scenario() {
    let list = create(&create(&[], "keep"), "drop");
    let drop_id = list[1].id.clone();
    let list = toggle_completed(&list, &drop_id);

    let list = clear_completed(&list);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "keep");
}

#[test]
fn json_round_trip_preserves_operation_output() {
    let list = clear_completed(&toggle_completed(&create(&sample(), "new"), "a"));
    let raw = serde_json::to_string(&list).unwrap();
    let restored: Vec<Todo> = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, list);
}
