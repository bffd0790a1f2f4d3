//! Typed persistence of the collection
//!
//! The whole collection is one JSON array stored under a single key.
//! Every save replaces the stored value in full.

use tracing::{debug, warn};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::storage::KeyValueStorage;

/// Default key the collection is stored under
pub const COLLECTION_KEY: &str = "pokemons";

pub struct Store {
    storage: Box<dyn KeyValueStorage>,
    key: String,
}

impl Store {
    /// Store the collection under [`COLLECTION_KEY`]
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self::with_key(Box::new(storage), COLLECTION_KEY)
    }

    /// Store the collection under a custom key
    pub fn with_key(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted collection, empty when nothing usable is stored
    pub fn load(&self) -> Collection {
        self.load_existing().unwrap_or_default()
    }

    /// Persisted collection, `None` when nothing usable is stored
    ///
    /// Unreadable or unparseable values are logged and treated as absent;
    /// the bad value stays in place until the next save replaces it.
    pub fn load_existing(&self) -> Option<Collection> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(
                    "Failed to read '{}' from {} storage: {}",
                    self.key,
                    self.storage.name(),
                    e
                );
                return None;
            }
        };

        if raw.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<Collection>(&raw) {
            Ok(collection) => Some(collection),
            Err(e) => {
                warn!(
                    "Stored '{}' is not a valid collection, treating it as empty: {}",
                    self.key, e
                );
                None
            }
        }
    }

    /// Serialize and overwrite the persisted collection
    pub fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let raw = serde_json::to_string(collection)?;
        self.storage.set(&self.key, &raw)?;

        debug!(
            "Saved {} pokemon(s) under '{}' ({} storage)",
            collection.len(),
            self.key,
            self.storage.name()
        );
        Ok(())
    }

    /// Remove the persisted collection
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(&self.key)?;
        Ok(())
    }
}
