//! Pure transformations over the ordered todo sequence.
//!
//! Every function takes the current list by slice and returns a fresh `Vec`;
//! nothing mutates its input. Order is insertion order and is preserved by
//! every operation.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use crate::filter::Filter;
use crate::todo::Todo;

/// Trimmed `raw`, or `None` when it is blank.
#[must_use]
pub fn normalize_title(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Append a new incomplete todo titled `title`.
///
/// Empty and whitespace-only titles are rejected and the list is returned
/// unchanged. Accepted titles are stored exactly as typed.
#[must_use]
pub fn create(todos: &[Todo], title: &str) -> Vec<Todo> {
    if normalize_title(title).is_none() {
        return todos.to_vec();
    }
    append(todos, Todo::new(title))
}

/// Append an already-built todo.
#[must_use]
pub fn append(todos: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = Vec::with_capacity(todos.len() + 1);
    next.extend_from_slice(todos);
    next.push(todo);
    next
}

/// Invert `is_completed` on the todo with `id`. Unknown ids are a no-op.
#[must_use]
pub fn toggle_completed(todos: &[Todo], id: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
        .collect()
}

/// Remove the todo with `id`. Unknown ids are a no-op.
#[must_use]
pub fn delete(todos: &[Todo], id: &str) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

/// Drop every completed todo.
#[must_use]
pub fn clear_completed(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| !todo.is_completed).cloned().collect()
}

/// Todos visible under `mode`, in list order.
#[must_use]
pub fn filter(todos: &[Todo], mode: Filter) -> Vec<Todo> {
    todos.iter().filter(|todo| mode.matches(todo)).cloned().collect()
}

/// Number of todos not yet completed.
#[must_use]
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.is_completed).count()
}

/// Number of completed todos.
#[must_use]
pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.is_completed).count()
}

/// Footer counter text, e.g. `"3 items left"`.
///
/// Singular for zero and one, matching what the footer has always shown.
#[must_use]
pub fn items_left_label(count: usize) -> String {
    let noun = if count > 1 { "items" } else { "item" };
    format!("{count} {noun} left")
}
