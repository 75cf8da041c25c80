//! Persisted key-value preference store.
//!
//! The theme controller takes the store as a dependency so it can run against
//! [`MemoryStore`] in tests and non-browser builds, and against [`LocalStore`]
//! (`window.localStorage`) in the browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::error::UiError;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, scoped to the page origin.
///
/// Storage can be unavailable (private browsing, disabled cookies). Reads then
/// return `None` and writes fail with [`UiError::Storage`].
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(UiError::Storage { key: key.to_owned(), detail: "localStorage unavailable".into() });
        };
        storage
            .set_item(key, value)
            .map_err(|err| UiError::Storage { key: key.to_owned(), detail: format!("{err:?}") })
    }
}
