//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the todo list chrome and read/write the shared
//! `TodoApp` and `UiState` contexts provided by `App`.

pub mod filter_bar;
pub mod header;
pub mod todo_card;
pub mod todo_input;
pub mod todo_list;
