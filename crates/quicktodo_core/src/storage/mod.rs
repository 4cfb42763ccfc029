//! Key-value storage collaborators.
//!
//! # Responsibility
//! - Define the synchronous key-value contract the store persists through.
//! - Provide in-memory and file-backed implementations.
//!
//! # Invariants
//! - `set` fully replaces any prior value under the key.
//! - Implementations never interpret the stored value; it is an opaque
//!   UTF-8 string to this layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a storage backend.
///
/// Callers above the store layer never see these; the store swallows write
/// failures and treats read failures as an absent snapshot.
#[derive(Debug)]
pub enum StorageError {
    /// Backend I/O failure (quota, permissions, disk).
    Io(std::io::Error),
    /// Key is empty or contains characters the backend cannot map safely.
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Synchronous key-value storage contract.
///
/// Mirrors the shape of a browser `localStorage` collaborator: `get` returns
/// the raw value or absence, `set` overwrites the full value, and either call
/// may fail for backend reasons.
pub trait KeyValueStorage {
    /// Reads the raw value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
