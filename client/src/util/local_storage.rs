//! Browser `localStorage` backend for the todo store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `todos::Storage` over `window.localStorage` so `TodoApp` can
//! persist without knowing about `web-sys`. Outside the browser (SSR, host
//! tests) every call reports `StorageError::Unavailable`, which the store
//! treats as "no saved data".

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use todos::{Storage, StorageError};

/// Handle to `window.localStorage`. Looks the storage object up on each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn backend() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            backend()?
                .get_item(key)
                .map_err(|err| StorageError::Read { key: key.to_owned(), reason: js_reason(&err) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            backend()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write { key: key.to_owned(), reason: js_reason(&err) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
