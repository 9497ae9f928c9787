//! Todo list context type.

use leptos::prelude::RwSignal;
use todos::TodoApp;

use crate::util::local_storage::LocalStorage;

/// Reactive handle to the application's todo list, provided by `App`.
///
/// Handlers mutate it with `update`; every list change inside goes through
/// `TodoApp` and is mirrored into `localStorage`.
pub type TodoAppSignal = RwSignal<TodoApp<LocalStorage>>;
