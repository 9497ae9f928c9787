//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the todo list so toggling the
//! theme never writes storage.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use todos::ThemeMode;

/// UI state provided via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Current theme. Re-derived from the system preference on every load.
    pub theme: ThemeMode,
}

impl UiState {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}
