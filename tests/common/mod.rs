//! Shared test helpers: a configurable in-memory data source and
//! fixture builders.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use routescout::domain::entities::airport::{Airport, Country};
use routescout::domain::error::{DomainError, Result};
use routescout::domain::ports::data_source::DataSource;

/// In-memory [`DataSource`] with failure injection and in-flight
/// tracking for concurrency assertions.
#[derive(Default)]
pub struct StubSource {
    pub countries: Vec<Country>,
    pub airports: Vec<Airport>,
    pub links: HashMap<u64, Vec<Value>>,
    pub fail_countries: bool,
    pub fail_airports: bool,
    pub failing_links: HashSet<u64>,
    /// Artificial latency per links fetch, to make overlap observable.
    pub link_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubSource {
    pub fn new(countries: Vec<Country>, airports: Vec<Airport>) -> Self {
        Self {
            countries,
            airports,
            ..Default::default()
        }
    }

    pub fn with_links(mut self, airport_id: u64, links: Vec<Value>) -> Self {
        self.links.insert(airport_id, links);
        self
    }

    pub fn with_failing_links(mut self, airport_id: u64) -> Self {
        self.failing_links.insert(airport_id);
        self
    }

    pub fn with_link_delay(mut self, delay: Duration) -> Self {
        self.link_delay = delay;
        self
    }

    /// Highest number of links fetches that were in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for StubSource {
    async fn fetch_countries(&self) -> Result<Vec<Country>> {
        if self.fail_countries {
            return Err(DomainError::Upstream("countries endpoint down".into()));
        }
        Ok(self.countries.clone())
    }

    async fn fetch_airports(&self) -> Result<Vec<Airport>> {
        if self.fail_airports {
            return Err(DomainError::Upstream("airports endpoint down".into()));
        }
        Ok(self.airports.clone())
    }

    async fn fetch_airport_links(&self, airport_id: u64) -> Result<Vec<Value>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.link_delay.is_zero() {
            tokio::time::sleep(self.link_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_links.contains(&airport_id) {
            return Err(DomainError::Upstream(format!(
                "links endpoint down for airport {airport_id}"
            )));
        }
        Ok(self.links.get(&airport_id).cloned().unwrap_or_default())
    }
}

pub fn country(code: &str, openness: i32) -> Country {
    Country {
        country_code: code.into(),
        openness,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn airport(
    id: u64,
    iata: &str,
    name: &str,
    country_code: &str,
    latitude: f64,
    longitude: f64,
    population: u64,
    income_level: u32,
) -> Airport {
    Airport {
        id,
        iata: iata.into(),
        name: name.into(),
        country_code: country_code.into(),
        latitude,
        longitude,
        population,
        income_level,
    }
}
