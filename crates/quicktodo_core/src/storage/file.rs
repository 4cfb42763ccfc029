//! File-backed key-value storage.
//!
//! # Responsibility
//! - Map each key to one UTF-8 file under a root directory.
//! - Keep writes atomic enough for a single-process session (write to a
//!   temporary sibling, then rename).
//!
//! # Invariants
//! - Keys are restricted to `[A-Za-z0-9._-]` so they cannot escape the root.
//! - A missing file reads as an absent key, not an error.

use super::{KeyValueStorage, StorageError, StorageResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory-backed storage, one file per key.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory when missing.
    ///
    /// # Errors
    /// - I/O failure while creating the root directory.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!(
            "event=storage_open module=storage status=ok root={}",
            root.display()
        );
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || !key.chars().all(is_safe_key_char) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

fn is_safe_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-')
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        // Keys may contain dots, so build the staging name by appending
        // rather than swapping an "extension".
        let staging = self.root.join(format!("{key}.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}
