//! Todo list domain model, list operations, and best-effort persistence.
//!
//! This crate owns everything about the todo list that does not need a
//! browser: the record type, the pure list transformations, the view filter,
//! the theme mode, and the `PersistentState` store that mirrors a value into a
//! named storage slot. The `client` crate supplies a `web-sys` backed
//! [`Storage`] and renders [`TodoApp`] through Leptos.

pub mod app;
pub mod filter;
pub mod ops;
pub mod storage;
pub mod store;
pub mod theme;
pub mod todo;

pub use app::TodoApp;
pub use filter::Filter;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::PersistentState;
pub use theme::ThemeMode;
pub use todo::Todo;

/// Storage slot holding the JSON snapshot of the todo list.
pub const STORAGE_KEY: &str = "TODOS";
