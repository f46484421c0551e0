//! Data source port for the airline-sim API.
//!
//! The pipeline only ever talks to this trait; the reqwest adapter in
//! `infrastructure::api` is the production implementor and tests inject
//! stubs. Link records stay raw [`serde_json::Value`] because the
//! upstream's capacity schema is not stable; see
//! [`crate::domain::values::capacity`] for the defensive extraction.

use async_trait::async_trait;

use crate::domain::entities::airport::{Airport, Country};
use crate::domain::error::Result;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the bulk country collection. Cached by the adapter.
    async fn fetch_countries(&self) -> Result<Vec<Country>>;

    /// Fetch the bulk airport collection. Cached by the adapter.
    async fn fetch_airports(&self) -> Result<Vec<Airport>>;

    /// Fetch current traffic links for one airport. Never cached:
    /// competition data must reflect current state within a run.
    async fn fetch_airport_links(&self, airport_id: u64) -> Result<Vec<serde_json::Value>>;
}
