//! Key-value store abstraction
//!
//! The store holds one JSON object. `get(None)` returns all of it, `get(Some(key))`
//! returns an object holding at most that key, and `set` upserts the given
//! top-level entries, leaving other keys alone.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::StoreError;
use serde_json::{Map, Value};

/// String-keyed store of JSON values
pub trait KeyValueStore {
    /// Read one key, or the whole store when `key` is `None`.
    ///
    /// A missing key yields an empty object, not an error.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: Option<&str>) -> Result<Map<String, Value>, StoreError>;

    /// Upsert top-level entries in a single write.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, entries: Map<String, Value>) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: Option<&str>) -> Result<Map<String, Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, entries: Map<String, Value>) -> Result<(), StoreError> {
        (**self).set(entries)
    }
}

/// Pick `key` (or everything) out of a full document
pub(crate) fn select(document: &Map<String, Value>, key: Option<&str>) -> Map<String, Value> {
    match key {
        None => document.clone(),
        Some(k) => document
            .get(k)
            .map(|v| {
                let mut single = Map::new();
                single.insert(k.to_string(), v.clone());
                single
            })
            .unwrap_or_default(),
    }
}
