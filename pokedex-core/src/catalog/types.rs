//! Typed views of catalog documents
//!
//! Fields the application relies on are declared and required. Everything
//! else in a creature document is kept in `extra` so the stored record is
//! the full catalog response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,

    /// Fully-qualified resource URL
    #[serde(default)]
    pub url: String,
}

/// An unnamed reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// A creature document from `/pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: u32,

    pub name: String,

    pub sprites: Sprites,

    /// Base stats in catalog order
    pub stats: Vec<Stat>,

    /// Species reference, used to find the evolution chain
    pub species: NamedResource,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatureRecord {
    /// Best available image URL
    pub fn artwork(&self) -> Option<&str> {
        self.sprites.artwork()
    }

    /// Base value of the named stat (e.g. "hp", "speed")
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub other: Option<OtherSprites>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Sprites {
    /// Dream-world artwork, then official artwork, then the default sprite
    pub fn artwork(&self) -> Option<&str> {
        let other = self.other.as_ref();

        other
            .and_then(|o| o.dream_world.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or_else(|| {
                other
                    .and_then(|o| o.official_artwork.as_ref())
                    .and_then(|a| a.front_default.as_deref())
            })
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default)]
    pub dream_world: Option<Artwork>,

    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub base_stat: u32,

    pub stat: NamedResource,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A species document from `/pokemon-species/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDetail {
    #[serde(default)]
    pub name: String,

    pub evolution_chain: ApiResource,
}

/// An evolution chain document from `/evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: u32,

    /// Root of the chain (the base form)
    pub chain: ChainLink,
}

/// One node of an evolution chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// The successor followed when a node branches
    pub fn first_successor(&self) -> Option<&ChainLink> {
        self.evolves_to.first()
    }

    pub fn has_successor(&self) -> bool {
        !self.evolves_to.is_empty()
    }

    /// Nodes along the first-successor path, starting at this node
    pub fn first_branch(&self) -> FirstBranch<'_> {
        FirstBranch { next: Some(self) }
    }
}

/// Iterator returned by [`ChainLink::first_branch`]
pub struct FirstBranch<'a> {
    next: Option<&'a ChainLink>,
}

impl<'a> Iterator for FirstBranch<'a> {
    type Item = &'a ChainLink;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.first_successor();
        Some(current)
    }
}
