//! Browser `localStorage` behind a small write seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The retailer dashboard persists merged product records locally and never
//! sends them anywhere. State code writes through [`RecordStore`] so tests can
//! swap in an in-memory store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,
    #[error("Could not save record: {0}")]
    Write(String),
    #[error("Could not serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value sink for JSON records.
pub trait RecordStore {
    /// Store raw text under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the write.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Serialize `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] on serialization or write failure.
    fn put_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.put(key, &raw)
    }
}

/// The window's `localStorage`. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl RecordStore for LocalStorage {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub entries: std::collections::HashMap<String, String>,
    pub fail_writes: bool,
}

#[cfg(test)]
impl RecordStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
