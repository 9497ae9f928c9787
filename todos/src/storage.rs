//! Durable key-value storage abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Storage`] mirrors the browser `Storage` API (`getItem` / `setItem`) so the
//! persistent store can run against `window.localStorage` in the client and
//! against [`MemoryStorage`] everywhere else.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reading, writing, or decoding a storage slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, SSR, access denied).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused to read the slot.
    #[error("failed to read slot `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// The backend refused to write the slot, e.g. quota exceeded.
    #[error("failed to write slot `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// The slot holds text that does not decode as the expected value.
    #[error("malformed value in slot `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The value could not be encoded as JSON.
    #[error("failed to serialize value for slot `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed, string-valued durable store.
pub trait Storage {
    /// Read the raw text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] or [`StorageError::Read`] when the
    /// backend cannot be queried.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] or [`StorageError::Write`] when the
    /// backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage backed by a shared map.
///
/// Clones share the same slots, so a test can hand one clone to a store and
/// inspect the other. An optional byte quota makes writes fail the way a full
/// `localStorage` does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { slots: Rc::default(), quota: Some(bytes) }
    }

    /// Raw text currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Write raw text directly, bypassing the quota.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::Write {
                    key: key.to_owned(),
                    reason: format!("quota exceeded ({needed} > {quota} bytes)"),
                });
            }
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
