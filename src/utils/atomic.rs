//! Atomic file operations
//!
//! State files are replaced with write-to-temp, `sync_all`, rename, so a
//! reader sees either the old record or the new one, never a partial write.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Extension used for in-flight writes
pub const TEMP_EXTENSION: &str = "tmp";

/// Atomically replace `path` with `content`
///
/// Creates the parent directory when it does not exist yet.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension(TEMP_EXTENSION);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove `.tmp` files left behind by interrupted writes
///
/// Returns how many files were removed. A missing directory counts as clean.
pub fn cleanup_temp_files<P: AsRef<Path>>(dir: P) -> io::Result<usize> {
    let dir = dir.as_ref();
    let mut cleaned = 0;

    if !dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().is_some_and(|e| e == TEMP_EXTENSION) {
            fs::remove_file(&path)?;
            cleaned += 1;
        }
    }

    Ok(cleaned)
}
