//! Value bound to a named storage slot.
//!
//! DESIGN
//! ======
//! `PersistentState` holds the in-memory value used for rendering and writes
//! the full serialized value to its slot on every update. There is no diffing,
//! batching, or cross-tab sync.
//!
//! TRADE-OFFS
//! ==========
//! Storage is treated as a best-effort cache. Reads that fail fall back to a
//! caller-supplied default, and writes that fail still update the in-memory
//! value. Write errors are returned so callers discard them explicitly.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{Storage, StorageError};

/// An in-memory value mirrored into one storage slot.
#[derive(Clone, Debug)]
pub struct PersistentState<T, S> {
    key: String,
    value: T,
    storage: S,
}

impl<T, S> PersistentState<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Storage,
{
    /// Read `key` from `storage`, falling back to `default()` when the slot is
    /// missing, malformed, or unreadable.
    pub fn load(storage: S, key: impl Into<String>, default: impl FnOnce() -> T) -> Self {
        let key = key.into();
        let value = read_or_default(&storage, &key, default);
        Self { key, value, storage }
    }

    /// Wrap `value` without touching storage. Call [`Self::reload`] later to
    /// pick up the stored snapshot.
    pub fn new(storage: S, key: impl Into<String>, value: T) -> Self {
        Self { key: key.into(), value, storage }
    }

    /// Re-read the slot, replacing the in-memory value.
    pub fn reload(&mut self, default: impl FnOnce() -> T) {
        self.value = read_or_default(&self.storage, &self.key, default);
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the value and write it to the slot.
    ///
    /// The in-memory value is replaced even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from serializing or writing the slot.
    pub fn set(&mut self, next: T) -> Result<(), StorageError> {
        let written = write_slot(&self.storage, &self.key, &next);
        self.value = next;
        written
    }

    /// Compute the next value from the current one, then [`Self::set`] it.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from serializing or writing the slot.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), StorageError> {
        let next = f(&self.value);
        self.set(next)
    }
}

/// Read and decode the slot `key`.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] when the slot does not decode as `T`,
/// or whatever error the backend reports.
pub fn read_slot<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed { key: key.to_owned(), source })
}

/// Encode `value` as JSON and overwrite the slot `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] when encoding fails, or whatever error
/// the backend reports.
pub fn write_slot<T: Serialize>(storage: &impl Storage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
    storage.set_item(key, &raw)
}

fn read_or_default<T: DeserializeOwned>(storage: &impl Storage, key: &str, default: impl FnOnce() -> T) -> T {
    match read_slot(storage, key) {
        Ok(Some(value)) => {
            log::debug!("loaded slot `{key}` from storage");
            value
        }
        Ok(None) => default(),
        Err(err) => {
            log::warn!("{err}; using default value");
            default()
        }
    }
}
