//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The persisted todo list (`todos`) and presentation chrome (`ui`) are
//! provided as separate contexts so the theme toggle never touches storage.

pub mod todos;
pub mod ui;
