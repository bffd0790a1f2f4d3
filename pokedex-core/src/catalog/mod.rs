//! Pokedex Catalog - read-only lookups against PokeAPI
//!
//! # Overview
//!
//! The catalog resolves:
//! - creature records by name (`/pokemon/{name}`)
//! - species details and evolution chains by the URLs embedded in
//!   previous responses
//!
//! Every lookup either yields a parsed document or `None`. A 404, any
//! other non-200 status, a transport failure and an unexpected body shape
//! all collapse to `None`; the cause is only logged.
//!
//! # Architecture
//!
//! ```text
//! PokeAPI
//!     │
//!     ├── /pokemon/{name}          ← CreatureRecord
//!     ├── /pokemon-species/{id}    ← SpeciesDetail
//!     └── /evolution-chain/{id}    ← EvolutionChain
//!            │
//!            ▼
//!     Catalog (trait) ── HttpCatalog (reqwest)
//! ```

mod client;
mod types;

pub use client::{normalize_name, Catalog, HttpCatalog};
pub use types::{
    ApiResource, Artwork, ChainLink, CreatureRecord, EvolutionChain, FirstBranch, NamedResource,
    OtherSprites, SpeciesDetail, Sprites, Stat,
};
