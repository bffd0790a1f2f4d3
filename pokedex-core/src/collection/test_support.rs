//! Fixtures and a fake catalog for collection tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalog::{normalize_name, Catalog, CreatureRecord};

pub fn species_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")
}

pub fn chain_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/evolution-chain/{id}/")
}

pub fn creature_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "sprites": {
            "front_default": format!("https://img.example/{id}.png"),
            "other": { "dream_world": { "front_default": format!("https://img.example/dream/{id}.svg") } }
        },
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } }
        ],
        "species": { "name": name, "url": species_url(id) }
    })
}

pub fn creature(id: u32, name: &str) -> CreatureRecord {
    serde_json::from_value(creature_json(id, name)).expect("fixture creature is valid")
}

/// `{species, evolves_to}` tree with one successor per node
pub fn linear_chain(names: &[&str]) -> Value {
    names.iter().rev().fold(None::<Value>, |next, name| {
        let evolves_to: Vec<Value> = next.into_iter().collect();
        Some(json!({
            "species": { "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{name}/") },
            "evolves_to": evolves_to
        }))
    })
    .unwrap_or(Value::Null)
}

/// In-memory catalog that records every lookup
#[derive(Default, Clone)]
pub struct FakeCatalog {
    creatures: HashMap<String, CreatureRecord>,
    documents: HashMap<String, Value>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(mut self, record: CreatureRecord) -> Self {
        self.creatures.insert(record.name.clone(), record);
        self
    }

    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    /// Register a linear family: creatures, their species and a shared chain
    ///
    /// Ids are taken from the pairs; the chain id is the first creature's id.
    pub fn with_family(mut self, family: &[(u32, &str)]) -> Self {
        let Some(&(chain_id, _)) = family.first() else {
            return self;
        };
        let names: Vec<&str> = family.iter().map(|(_, name)| *name).collect();

        self = self.with_document(
            chain_url(chain_id),
            json!({ "id": chain_id, "chain": linear_chain(&names) }),
        );

        for &(id, name) in family {
            self = self.with_creature(creature(id, name)).with_document(
                species_url(id),
                json!({ "name": name, "evolution_chain": { "url": chain_url(chain_id) } }),
            );
        }
        self
    }

    /// Drop a creature so lookups for it miss
    pub fn without_creature(mut self, name: &str) -> Self {
        self.creatures.remove(name);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record_call(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn fetch_by_name(&self, name: &str) -> Option<CreatureRecord> {
        self.record_call(format!("name:{name}"));
        self.creatures.get(&normalize_name(name)).cloned()
    }

    async fn fetch_by_url(&self, url: &str) -> Option<Value> {
        self.record_call(format!("url:{url}"));
        self.documents.get(url).cloned()
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
