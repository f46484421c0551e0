//! Reqwest adapter for the airline-sim API.
//!
//! Bulk collections go through the injected [`TtlCache`]; per-airport
//! link detail is always fetched fresh. Every failure mode of a request
//! (connect error, timeout, non-2xx, malformed body) folds into
//! [`DomainError::Upstream`] so the pipeline has a single "data
//! unavailable" branch to handle.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::airport::{Airport, Country};
use crate::domain::error::{DomainError, Result};
use crate::domain::ports::data_source::DataSource;
use crate::infrastructure::api::cache::TtlCache;

const DEFAULT_BASE_URL: &str = "https://www.airline-club.com";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 routescout/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    cache: TtlCache,
}

impl ApiClient {
    /// Client against the production API with the default cache TTL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self::with_cache(base_url, TtlCache::new())
    }

    /// Test seam: inject a cache with a custom TTL.
    pub fn with_cache(base_url: String, cache: TtlCache) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            cache,
        }
    }

    /// GET an endpoint as JSON, optionally through the cache. The cache
    /// key is the endpoint path itself.
    async fn fetch_json(&self, endpoint: &str, use_cache: bool) -> Result<Value> {
        if use_cache {
            if let Some(payload) = self.cache.get(endpoint) {
                return Ok(payload);
            }
        }

        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("fetching {url}");

        let start = std::time::Instant::now();
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("GET {endpoint}: {e}")))?;

        let status = resp.status();
        tracing::debug!("GET {endpoint}: HTTP {status} in {:?}", start.elapsed());

        if !status.is_success() {
            return Err(DomainError::Upstream(format!(
                "GET {endpoint} returned HTTP {status}"
            )));
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("GET {endpoint}: {e}")))?;

        if use_cache {
            self.cache.insert(endpoint, payload.clone());
        }
        Ok(payload)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn fetch_countries(&self) -> Result<Vec<Country>> {
        let payload = self.fetch_json("/countries", true).await?;
        let countries: Vec<Country> = serde_json::from_value(payload)?;
        tracing::debug!("fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn fetch_airports(&self) -> Result<Vec<Airport>> {
        let payload = self.fetch_json("/airports", true).await?;
        let airports: Vec<Airport> = serde_json::from_value(payload)?;
        tracing::debug!("fetched {} airports", airports.len());
        Ok(airports)
    }

    async fn fetch_airport_links(&self, airport_id: u64) -> Result<Vec<Value>> {
        let payload = self
            .fetch_json(&format!("/airports/{airport_id}/links"), false)
            .await?;
        match payload {
            Value::Array(links) => Ok(links),
            other => Err(DomainError::Upstream(format!(
                "links for airport {airport_id}: expected an array, got {other}"
            ))),
        }
    }
}
