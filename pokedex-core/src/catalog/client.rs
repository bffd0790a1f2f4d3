//! Catalog client trait and its HTTP implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{CreatureRecord, EvolutionChain, SpeciesDetail};
use crate::config::CatalogConfig;

/// Trait for creature catalogs
///
/// Lookups never fail with an error: anything other than a usable document
/// is reported as `None`.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look up a creature by name (case-insensitive)
    async fn fetch_by_name(&self, name: &str) -> Option<CreatureRecord>;

    /// Fetch any fully-qualified resource URL taken from a previous response
    async fn fetch_by_url(&self, url: &str) -> Option<Value>;

    /// Fetch and decode a species document
    async fn fetch_species(&self, url: &str) -> Option<SpeciesDetail> {
        decode(self.fetch_by_url(url).await?, url)
    }

    /// Fetch and decode an evolution chain document
    async fn fetch_evolution_chain(&self, url: &str) -> Option<EvolutionChain> {
        decode(self.fetch_by_url(url).await?, url)
    }

    /// Catalog identifier for logging
    fn name(&self) -> &'static str;
}

fn decode<T: DeserializeOwned>(value: Value, url: &str) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Unexpected document shape from {}: {}", url, e);
            None
        }
    }
}

/// Lookup form of a creature name: trimmed and lower-cased
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// PokeAPI catalog over HTTP
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Create a catalog client from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        // Clamp timeout to a minimum of 1 second
        const MIN_TIMEOUT_SECONDS: u64 = 1;
        let timeout_seconds = if config.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                config.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            MIN_TIMEOUT_SECONDS
        } else {
            config.timeout_seconds
        };

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid catalog URL: {}", config.base_url))?;

        if base_url.cannot_be_a_base() {
            anyhow::bail!("Catalog URL cannot be used as a base: {}", config.base_url);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lookup URL for a creature name, `None` when the name is blank
    pub fn creature_url(&self, name: &str) -> Option<Url> {
        let name = normalize_name(name);
        if name.is_empty() {
            return None;
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("pokemon")
            .push(&name);
        Some(url)
    }

    async fn get_json(&self, url: Url) -> Option<Value> {
        debug!("GET {}", url);

        let response = match self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to reach catalog at {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Catalog returned HTTP {} for {}", status, url);
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to read catalog response from {}: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_by_name(&self, name: &str) -> Option<CreatureRecord> {
        let url = self.creature_url(name)?;
        let body = self.get_json(url.clone()).await?;
        decode(body, url.as_str())
    }

    async fn fetch_by_url(&self, url: &str) -> Option<Value> {
        match Url::parse(url) {
            Ok(parsed) => self.get_json(parsed).await,
            Err(e) => {
                warn!("Invalid catalog resource URL {:?}: {}", url, e);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "pokeapi"
    }
}
