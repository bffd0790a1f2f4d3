//! Error types for storage, the store and collection operations
//!
//! Collection operations surface two user-facing kinds: validation
//! failures caught before any I/O, and "not found" outcomes that cover
//! every catalog miss. Storage faults are kept apart so callers can
//! tell a lost write from an ordinary miss.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a key-value storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Errors raised while persisting the collection
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Broad classification of a [`CollectionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Type a pokemon name")]
    EmptyName,

    #[error("The pokemon {0} was not found!")]
    CreatureNotFound(String),

    #[error("The collection is empty")]
    EmptyCollection,

    #[error("No pokemon at index {index} (the collection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Species data for {0} is unavailable")]
    SpeciesUnavailable(String),

    #[error("The evolution chain for {0} is unavailable")]
    ChainUnavailable(String),

    #[error("{0} cannot evolve any further")]
    NoEvolution(String),

    #[error("Store error: {0}")]
    Storage(#[from] StoreError),
}

impl CollectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::EmptyName => ErrorKind::Validation,
            CollectionError::Storage(_) => ErrorKind::Storage,
            CollectionError::CreatureNotFound(_)
            | CollectionError::EmptyCollection
            | CollectionError::IndexOutOfRange { .. }
            | CollectionError::SpeciesUnavailable(_)
            | CollectionError::ChainUnavailable(_)
            | CollectionError::NoEvolution(_) => ErrorKind::NotFound,
        }
    }

    /// True for every outcome that means "no matching remote or local data"
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;
