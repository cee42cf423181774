//! Catalog Client Module
//!
//! HTTP access to the remote creature catalog with a cache-aside layer in
//! front of every request: the response cache is consulted before the
//! network, and raw response bodies are stored back after a successful
//! fetch, so an identical request inside the staleness window never reaches
//! the network.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::catalog::types::{AreaDetail, AreaPage, Creature};
use crate::config::Config;
use crate::error::Result;

// == Catalog Client ==

/// HTTP client for the creature catalog.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// response cache.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    page_limit: u32,
    cache: Cache,
}

impl CatalogClient {
    /// Builds a client for the catalog at `config.api_base_url`.
    ///
    /// Responses are cached in `cache`, keyed by the full request URL.
    ///
    /// # Arguments
    /// * `config` - Base URL, page size, and request timeout
    /// * `cache` - Response cache shared with the background sweeper
    pub fn new(config: &Config, cache: Cache) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
            cache,
        })
    }

    // == Area Listing ==

    /// Fetches one page of the area listing.
    ///
    /// With `page_url` the listing continues from a `next` or `previous` URL
    /// returned by an earlier page; without one, the first page is fetched.
    pub async fn fetch_area_page(&self, page_url: Option<&str>) -> Result<AreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };
        self.fetch_json(&url).await
    }

    // == Area Detail ==

    /// Fetches the creatures sighted in the named area.
    pub async fn fetch_area(&self, name: &str) -> Result<AreaDetail> {
        let url = format!("{}/areas/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    // == Creature ==

    /// Fetches the full record for the named creature.
    pub async fn fetch_creature(&self, name: &str) -> Result<Creature> {
        let url = format!("{}/creatures/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// URL of the first listing page.
    fn first_page_url(&self) -> String {
        format!("{}/areas?offset=0&limit={}", self.base_url, self.page_limit)
    }

    // == Fetch ==

    /// Resolves `url` through the cache, going to the network only on a
    /// miss.
    ///
    /// On a miss the raw body bytes are stored back under the full URL, but
    /// only after they decode: failure statuses and malformed bodies are
    /// never cached, so a later retry reaches the network again.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(bytes) = self.cache.get(url).await {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        debug!("fetching {} from the catalog", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let decoded = serde_json::from_slice(&bytes)?;

        self.cache.add(url.to_string(), bytes.to_vec()).await;
        Ok(decoded)
    }
}
