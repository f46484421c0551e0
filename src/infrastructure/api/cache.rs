//! TTL cache for bulk API payloads.
//!
//! Owned by the API client that it is constructed into; nothing here is
//! global. Entries are whole-value replacements keyed by endpoint path,
//! expire lazily on access, and there is no background eviction. Last
//! writer wins when concurrent runs refresh the same key; a duplicate
//! fetch inside one TTL window is acceptable, corruption is not possible.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;

/// Default time-to-live for bulk reference data: 10 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct Entry {
    payload: Value,
    fetched_at: Instant,
}

pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Payload for `key` if an entry exists and is younger than the TTL.
    /// Expired entries are left in place; the next successful fetch
    /// overwrites them.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().ok()?;
        let entry = match entries.get(key) {
            Some(e) => e,
            None => {
                tracing::debug!("cache MISS for {key}");
                return None;
            }
        };
        let age = entry.fetched_at.elapsed();
        if age < self.ttl {
            tracing::debug!("cache HIT for {key} (age: {:.1}s)", age.as_secs_f64());
            Some(entry.payload.clone())
        } else {
            tracing::debug!("cache EXPIRED for {key} (age: {:.1}s)", age.as_secs_f64());
            None
        }
    }

    pub fn insert(&self, key: &str, payload: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                Entry {
                    payload,
                    fetched_at: Instant::now(),
                },
            );
        }
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}
