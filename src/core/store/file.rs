//! JSON file store

use super::{select, KeyValueStore};
use crate::core::StoreError;
use crate::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Store persisted as a single JSON object on disk
///
/// A missing file reads as an empty store. Writes go to a sibling temp file
/// that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path`. Nothing is touched until the first read or write.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(document) => Ok(document),
            other => Err(StoreError::Schema(format!(
                "expected a JSON object at the root of {}, found {}",
                self.path.display(),
                kind(&other)
            ))),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: Option<&str>) -> Result<Map<String, Value>, StoreError> {
        let document = self.read_document()?;
        Ok(select(&document, key))
    }

    fn set(&mut self, entries: Map<String, Value>) -> Result<(), StoreError> {
        let mut document = self.read_document()?;
        debug!(
            "Writing {} key(s) to {}",
            entries.len(),
            self.path.display()
        );
        document.extend(entries);
        self.write_document(&document)
    }
}
