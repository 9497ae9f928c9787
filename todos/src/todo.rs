#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task record.
///
/// Field names serialize as `id`, `title`, `isCompleted` so snapshots written
/// by earlier builds of the app keep loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique, stable identifier (UUID v4 string).
    pub id: String,
    /// Non-empty task text.
    pub title: String,
    /// Whether the task has been checked off.
    pub is_completed: bool,
}

impl Todo {
    /// Create an incomplete todo with a freshly generated id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title)
    }

    /// Create an incomplete todo with a caller-chosen id.
    #[must_use]
    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), is_completed: false }
    }

    /// Copy of this todo with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self { is_completed: !self.is_completed, ..self.clone() }
    }
}
