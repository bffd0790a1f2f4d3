//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern. Builds
//! PokeAPI-shaped documents whose embedded URLs point at a mock server.

#![allow(dead_code)]

use pokedex_core::config::CatalogConfig;
use pokedex_core::HttpCatalog;
use serde_json::{json, Value};
use std::sync::Once;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// HTTP catalog pointed at the mock server
pub fn catalog_for(server: &MockServer) -> HttpCatalog {
    HttpCatalog::new(&CatalogConfig {
        base_url: format!("{}/api/v2", server.uri()),
        timeout_seconds: 5,
    })
    .expect("mock catalog builds")
}

pub fn species_path(id: u32) -> String {
    format!("/api/v2/pokemon-species/{id}/")
}

pub fn chain_path(id: u32) -> String {
    format!("/api/v2/evolution-chain/{id}/")
}

pub fn creature_body(server: &MockServer, id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "sprites": {
            "front_default": format!("{}/sprites/{id}.png", server.uri()),
            "other": {
                "dream_world": { "front_default": format!("{}/sprites/dream/{id}.svg", server.uri()) }
            }
        },
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": format!("{}/api/v2/stat/1/", server.uri()) } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": format!("{}/api/v2/stat/4/", server.uri()) } }
        ],
        "species": { "name": name, "url": format!("{}{}", server.uri(), species_path(id)) }
    })
}

/// `{species, evolves_to}` tree with one successor per node
pub fn linear_chain(names: &[&str]) -> Value {
    names
        .iter()
        .rev()
        .fold(None::<Value>, |next, name| {
            let evolves_to: Vec<Value> = next.into_iter().collect();
            Some(json!({ "species": { "name": name }, "evolves_to": evolves_to }))
        })
        .unwrap_or(Value::Null)
}

pub async fn mount_creature(server: &MockServer, id: u32, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(creature_body(server, id, name)))
        .mount(server)
        .await;
}

/// Mount creatures, species and one shared chain for a linear family
pub async fn mount_family(server: &MockServer, family: &[(u32, &str)]) {
    let chain_id = family[0].0;
    let names: Vec<&str> = family.iter().map(|(_, name)| *name).collect();

    Mock::given(method("GET"))
        .and(path(chain_path(chain_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": chain_id, "chain": linear_chain(&names) })),
        )
        .mount(server)
        .await;

    for &(id, name) in family {
        mount_creature(server, id, name).await;

        Mock::given(method("GET"))
            .and(path(species_path(id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": name,
                "evolution_chain": { "url": format!("{}{}", server.uri(), chain_path(chain_id)) }
            })))
            .mount(server)
            .await;
    }
}
