//! Pokedex configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. An explicit file passed with `--config`
//! 2. `.pokedex/config.json` - Project-level config
//! 3. `~/.config/pokedex/config.json` - Global config
//! 4. Built-in defaults
//!
//! `POKEDEX_CATALOG_URL` overrides `catalog.base_url` from any source.
//!
//! ```json
//! {
//!   "catalog": { "base_url": "https://pokeapi.co/api/v2", "timeout_seconds": 30 },
//!   "storage": { "data_dir": "/home/ash/.pokedex", "key": "pokemons" }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::FileStorage;
use crate::store::COLLECTION_KEY;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable overriding the catalog endpoint
pub const CATALOG_URL_ENV: &str = "POKEDEX_CATALOG_URL";

/// Project-level config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".pokedex/config.json";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokedexConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Catalog client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the REST catalog
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Local storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (platform data directory if not set)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Key the collection is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_key(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_key() -> String {
    COLLECTION_KEY.to_string()
}

impl PokedexConfig {
    /// Load configuration from a specific file
    ///
    /// Unlike discovered files, an explicit file must exist and parse.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load a discovered config file, `None` if it does not exist
    ///
    /// A file that exists but cannot be parsed yields the defaults.
    pub fn load_optional(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Some(Self::default())
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Try project config first, then global, then use defaults
    pub fn load_with_precedence(project: Option<&Path>, global: Option<&Path>) -> Self {
        project
            .and_then(Self::load_optional)
            .or_else(|| global.and_then(Self::load_optional))
            .unwrap_or_default()
    }

    /// Resolve configuration from all sources
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let global = Self::global_config_path();
                Self::load_with_precedence(
                    Some(Path::new(PROJECT_CONFIG_PATH)),
                    global.as_deref(),
                )
            }
        };

        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(CATALOG_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!("Using catalog URL from {}: {}", CATALOG_URL_ENV, url);
                self.catalog.base_url = url;
            }
        }
    }

    /// Platform-specific global config file
    ///
    /// - Linux: `~/.config/pokedex/config.json`
    /// - macOS: `~/Library/Application Support/dev.pokedex.pokedex/config.json`
    /// - Windows: `%APPDATA%\pokedex\pokedex\config\config.json`
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "pokedex", "pokedex")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("pokedex")))
            .map(|dir| dir.join("config.json"))
    }

    /// File storage for the configured data directory
    pub fn file_storage(&self) -> std::result::Result<FileStorage, StorageError> {
        match &self.storage.data_dir {
            Some(dir) => Ok(FileStorage::new(dir)),
            None => FileStorage::default_location(),
        }
    }
}
