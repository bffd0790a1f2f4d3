//! Collection operations: add, remove and evolve by index

use tracing::{debug, info};

use super::{evolution, Collection};
use crate::catalog::{Catalog, CreatureRecord};
use crate::error::{CollectionError, Result};
use crate::store::Store;

/// Outcome of [`CollectionManager::remove_at`]
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    /// The entry was removed and the new collection persisted
    Removed {
        removed: CreatureRecord,
        collection: Collection,
    },
    /// Nothing stored at that index; nothing was written
    NoOp,
}

/// Runs collection operations against a store and a catalog
///
/// Every mutating operation performs a single load → mutate → save pass.
/// Operations are expected to run one at a time; two concurrent mutations
/// against the same store can lose an update.
pub struct CollectionManager {
    store: Store,
    catalog: Box<dyn Catalog>,
}

impl CollectionManager {
    pub fn new(store: Store, catalog: Box<dyn Catalog>) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current persisted collection
    pub fn load(&self) -> Collection {
        self.store.load()
    }

    /// Look up a creature by name and append it to the collection
    pub async fn add(&self, name: &str) -> Result<CreatureRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyName);
        }

        let record = self
            .catalog
            .fetch_by_name(name)
            .await
            .ok_or_else(|| CollectionError::CreatureNotFound(name.to_string()))?;

        let mut collection = self.store.load();
        collection.push(record.clone());
        self.store.save(&collection)?;

        info!(
            "Added {} (#{}) at index {}",
            record.name,
            record.id,
            collection.len() - 1
        );
        Ok(record)
    }

    /// Remove the entry at `index`
    ///
    /// An out-of-range index, or no stored collection at all, is
    /// [`Removal::NoOp`] rather than an error.
    pub fn remove_at(&self, index: usize) -> Result<Removal> {
        let Some(mut collection) = self.store.load_existing() else {
            debug!("remove_at({}): no stored collection", index);
            return Ok(Removal::NoOp);
        };

        let Some(removed) = collection.remove_at(index) else {
            debug!(
                "remove_at({}): out of range for {} entries",
                index,
                collection.len()
            );
            return Ok(Removal::NoOp);
        };

        self.store.save(&collection)?;

        info!("Removed {} from index {}", removed.name, index);
        Ok(Removal::Removed {
            removed,
            collection,
        })
    }

    /// Replace the entry at `index` with its next evolution
    ///
    /// The collection keeps its length and every other entry. On any
    /// failure nothing is written.
    pub async fn evolve_at(&self, index: usize) -> Result<Collection> {
        let mut collection = self
            .store
            .load_existing()
            .ok_or(CollectionError::EmptyCollection)?;

        let current = collection
            .get(index)
            .cloned()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: collection.len(),
            })?;

        let evolved = self.resolve_evolution(&current).await?;
        collection.replace_at(index, evolved.clone());
        self.store.save(&collection)?;

        info!(
            "{} at index {} evolved into {}",
            current.name, index, evolved.name
        );
        Ok(collection)
    }

    async fn resolve_evolution(&self, current: &CreatureRecord) -> Result<CreatureRecord> {
        if current.species.url.is_empty() {
            return Err(CollectionError::SpeciesUnavailable(current.name.clone()));
        }

        let species = self
            .catalog
            .fetch_species(&current.species.url)
            .await
            .ok_or_else(|| CollectionError::SpeciesUnavailable(current.name.clone()))?;

        let chain = self
            .catalog
            .fetch_evolution_chain(&species.evolution_chain.url)
            .await
            .ok_or_else(|| CollectionError::ChainUnavailable(current.name.clone()))?;

        let target = evolution::next_evolution(&chain.chain, &current.name)
            .ok_or_else(|| CollectionError::NoEvolution(current.name.clone()))?;

        debug!(
            "{} evolves into {} (chain via {})",
            current.name,
            target,
            self.catalog.name()
        );

        self.catalog
            .fetch_by_name(target)
            .await
            .ok_or_else(|| CollectionError::CreatureNotFound(target.to_string()))
    }
}
