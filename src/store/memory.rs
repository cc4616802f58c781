//! In-process store with no durability

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{validate_key, StateStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        Ok(self.records.lock().get(key).cloned())
    }

    fn save(&self, key: &str, contents: &str) -> StoreResult<()> {
        validate_key(key)?;
        self.records
            .lock()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
