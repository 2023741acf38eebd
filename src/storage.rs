use gloo_utils::errors::JsError;
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("browser storage call failed: {0}")]
    Browser(String),
    #[error("value stored under `{key}` is not a valid JSON array: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        let message = match JsError::try_from(value) {
            Ok(err) => err.to_string(),
            Err(other) => format!("{:?}", other),
        };
        StorageError::Browser(message)
    }
}

/// Flat string key-value storage, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The browser's `localStorage` for the current origin.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window.local_storage()?.ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.storage.set_item(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Ok(self.storage.remove_item(key)?)
    }
}

/// In-process storage. Used by tests and when the browser refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Shared handle placed in Leptos context so components reach the same store.
#[derive(Clone)]
pub struct StorageHandle(Rc<dyn KeyValueStore>);

impl StorageHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Browser `localStorage`, or an empty in-memory store when it cannot be opened.
    pub fn browser_or_memory() -> Self {
        match BrowserStorage::local() {
            Ok(storage) => {
                log!("[STORAGE] Using browser localStorage");
                Self::new(storage)
            }
            Err(err) => {
                error!("[STORAGE] {}; falling back to in-memory storage", err);
                Self::new(MemoryStorage::new())
            }
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.0.as_ref()
    }
}

/// Reads a JSON array stored under `key`. An absent key is an empty collection.
pub fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

pub fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(items).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &encoded)
}
