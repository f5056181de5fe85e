//! Error type for key-value store access

use std::fmt;

/// Failure reading or writing the key-value store
#[derive(Debug)]
pub enum StoreError {
    /// Underlying file could not be read or written
    Io(std::io::Error),
    /// Stored data is not valid JSON, or a value does not match its schema
    Json(serde_json::Error),
    /// Stored document has the wrong shape (e.g. the root is not an object)
    Schema(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store I/O error: {e}"),
            Self::Json(e) => write!(f, "store JSON error: {e}"),
            Self::Schema(s) => write!(f, "store schema error: {s}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Schema(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
