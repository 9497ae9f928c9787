#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::todo::Todo;

/// View-level predicate selecting which todos are shown.
///
/// Transient UI state; never written to storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in the order the filter bar renders them.
    pub const VARIANTS: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Lowercase mode name (`all`, `active`, `completed`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Button label for the filter bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Whether `todo` is visible under this filter.
    #[must_use]
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.is_completed,
            Self::Completed => todo.is_completed,
        }
    }

    /// Placeholder text shown when nothing matches.
    #[must_use]
    pub fn empty_message(self) -> String {
        match self {
            Self::All => "There's no todo yet".to_owned(),
            other => format!("There's no {} todo yet", other.as_str()),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
