//! Key-value persistence port
//!
//! The rotation engine and the statistics ledger each keep one JSON record
//! under a fixed key. Stores only move strings; the typed helpers here do the
//! (de)serialization and fail open on anything unreadable.
//!
//! ```text
//! RotationEngine ──► save_json("mic-presenter-rotation")  ─┐
//!                                                          ├──► StateStore (file / memory)
//! StatisticsLedger ─► save_json("presentation-statistics") ┘
//! ```

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key of the rotation record
pub const ROTATION_KEY: &str = "mic-presenter-rotation";

/// Key of the statistics record
pub const STATISTICS_KEY: &str = "presentation-statistics";

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

/// A synchronous string key-value store
pub trait StateStore: Send + Sync {
    /// Raw contents stored under `key`, `None` when nothing was saved yet
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the contents stored under `key`
    fn save(&self, key: &str, contents: &str) -> StoreResult<()>;
}

/// Keys become file names, so keep them to a safe alphabet
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Load and parse the record under `key`
///
/// Missing, unreadable and unparseable records all come back as `None`.
/// Failures are logged, never returned.
pub fn load_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no persisted record");
            return None;
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted record");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "persisted record is corrupt, ignoring it");
            None
        }
    }
}

/// Serialize `value` and store it under `key`
pub fn save_json<T: Serialize>(store: &dyn StateStore, key: &str, value: &T) -> StoreResult<()> {
    let contents = serde_json::to_string(value)?;
    store.save(key, &contents)
}
