//! In-memory store

use super::{select, KeyValueStore};
use crate::core::StoreError;
use serde_json::{Map, Value};

/// Store backed by a map in memory; counts writes so callers can check batching
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Map<String, Value>,
    writes: usize,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing document
    #[must_use]
    pub const fn with_document(document: Map<String, Value>) -> Self {
        Self {
            document,
            writes: 0,
        }
    }

    /// Number of `set` calls so far
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// The full document
    #[must_use]
    pub const fn document(&self) -> &Map<String, Value> {
        &self.document
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: Option<&str>) -> Result<Map<String, Value>, StoreError> {
        Ok(select(&self.document, key))
    }

    fn set(&mut self, entries: Map<String, Value>) -> Result<(), StoreError> {
        self.document.extend(entries);
        self.writes += 1;
        Ok(())
    }
}
