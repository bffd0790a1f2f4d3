//! Key-value storage backends
//!
//! The collection lives under a single string key in a synchronous
//! key-value store. Two backends are provided:
//! - [`FileStorage`]: one JSON file per key in a data directory
//! - [`MemoryStorage`]: a shared in-process map (tests, ephemeral use)

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Trait for synchronous key-value storage backends
///
/// `set` always replaces the whole value; there are no merge semantics.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key` (missing keys are not an error)
    fn remove(&self, key: &str) -> Result<()>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}

/// Keys double as file stems, so they are restricted to `[A-Za-z0-9_-]`
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
