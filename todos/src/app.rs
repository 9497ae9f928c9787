//! Application state for the todo list.
//!
//! DESIGN
//! ======
//! `TodoApp` owns the persisted todo list and the transient filter. Event
//! handlers take it by `&mut` and call one method per user action; each list
//! change goes through a pure function in [`crate::ops`] and is then committed
//! to the store.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::STORAGE_KEY;
use crate::filter::Filter;
use crate::ops;
use crate::storage::Storage;
use crate::store::PersistentState;
use crate::todo::Todo;

/// Todo list plus the active view filter.
#[derive(Clone, Debug)]
pub struct TodoApp<S> {
    todos: PersistentState<Vec<Todo>, S>,
    filter: Filter,
}

impl<S: Storage> TodoApp<S> {
    /// Load the saved list from [`STORAGE_KEY`], starting empty when there is
    /// no usable snapshot.
    ///
    /// Records are taken as stored: a snapshot that decodes but holds blank
    /// titles or repeated ids is not repaired, and id-based actions then
    /// apply to every record sharing that id.
    pub fn load(storage: S) -> Self {
        Self { todos: PersistentState::load(storage, STORAGE_KEY, Vec::new), filter: Filter::default() }
    }

    /// Start with an empty list without reading storage.
    pub fn new(storage: S) -> Self {
        Self { todos: PersistentState::new(storage, STORAGE_KEY, Vec::new()), filter: Filter::default() }
    }

    /// Replace the in-memory list with the saved snapshot.
    pub fn reload(&mut self) {
        self.todos.reload(Vec::new);
    }

    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        self.todos.get()
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Todos matching the active filter, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<Todo> {
        ops::filter(self.todos(), self.filter)
    }

    /// Whether any todo matches the active filter. Does not clone the list.
    #[must_use]
    pub fn has_visible(&self) -> bool {
        self.todos().iter().any(|todo| self.filter.matches(todo))
    }

    /// Create a todo from raw input. Returns `false` when the title is blank,
    /// in which case nothing is written.
    pub fn submit(&mut self, title: &str) -> bool {
        if ops::normalize_title(title).is_none() {
            return false;
        }
        let next = ops::create(self.todos(), title);
        self.commit(next);
        true
    }

    pub fn toggle_completed(&mut self, id: &str) {
        let next = ops::toggle_completed(self.todos(), id);
        self.commit(next);
    }

    pub fn delete(&mut self, id: &str) {
        let next = ops::delete(self.todos(), id);
        self.commit(next);
    }

    pub fn clear_completed(&mut self) {
        let next = ops::clear_completed(self.todos());
        self.commit(next);
    }

    #[must_use]
    pub fn items_left_label(&self) -> String {
        ops::items_left_label(self.todos().len())
    }

    #[must_use]
    pub fn empty_message(&self) -> String {
        self.filter.empty_message()
    }

    fn commit(&mut self, next: Vec<Todo>) {
        if let Err(err) = self.todos.set(next) {
            log::warn!("todo list not saved: {err}");
        }
    }
}
