//! File-backed store: one `<key>.json` per record in a data directory

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::utils::{atomic_write, cleanup_temp_files};

use super::{validate_key, StateStore, StoreResult};

/// Durable store of record
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) a store rooted at `data_dir`
    ///
    /// Temp files from interrupted writes are removed on open.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;

        let cleaned = cleanup_temp_files(&data_dir)?;
        if cleaned > 0 {
            tracing::warn!(cleaned, dir = %data_dir.display(), "removed interrupted writes");
        }

        Ok(Self { data_dir })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding `key`
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;

        match fs::read_to_string(self.record_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, contents: &str) -> StoreResult<()> {
        validate_key(key)?;
        atomic_write(self.record_path(key), contents)?;
        Ok(())
    }
}
