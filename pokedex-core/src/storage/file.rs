//! File-based storage
//!
//! Each key maps to `<dir>/<key>.json`. Writes go through a temp file in
//! the same directory followed by a rename, so readers only ever see the
//! previous value or the new one.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{validate_key, KeyValueStorage, Result};
use crate::error::StorageError;

/// File-based key-value storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the platform data directory
    ///
    /// - Linux: `~/.local/share/pokedex/`
    /// - macOS: `~/Library/Application Support/dev.pokedex.pokedex/`
    /// - Windows: `%APPDATA%\pokedex\pokedex\data\`
    pub fn default_location() -> Result<Self> {
        directories::ProjectDirs::from("dev", "pokedex", "pokedex")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .or_else(|| dirs::data_dir().map(|d| d.join("pokedex")))
            .map(Self::new)
            .ok_or(StorageError::NoDataDir)
    }

    /// Directory holding the storage files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_error(&self.dir))?;
        tmp.write_all(value.as_bytes()).map_err(io_error(tmp.path()))?;
        tmp.as_file().sync_all().map_err(io_error(tmp.path()))?;
        tmp.persist(&path).map_err(|e| io_error(&path)(e.error))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
