//! Pokedex core library exports

pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use catalog::{Catalog, CreatureRecord, HttpCatalog};
pub use collection::{Collection, CollectionManager, Removal};
pub use config::PokedexConfig;
pub use error::{CollectionError, ErrorKind};
pub use store::Store;
