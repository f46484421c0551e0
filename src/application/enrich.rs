//! Competition enrichment stage.
//!
//! Annotates each filtered candidate with the aggregate seat capacity of
//! the traffic links already serving its airport. One links fetch is
//! issued per candidate; a counting semaphore caps how many are in flight
//! at once. The stage is strict fan-out/fan-in: it returns only when every
//! candidate has been annotated, and a failed or malformed fetch degrades
//! that one candidate to zero competition instead of failing the batch.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::domain::entities::candidate::Candidate;
use crate::domain::error::{DomainError, Result};
use crate::domain::ports::data_source::DataSource;
use crate::domain::values::capacity::total_competition_seats;

/// Default cap on concurrently outstanding links fetches.
pub const DEFAULT_CONCURRENCY: usize = 20;

pub struct Enricher {
    source: Arc<dyn DataSource>,
    permits: Arc<Semaphore>,
}

impl Enricher {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self::with_concurrency(source, DEFAULT_CONCURRENCY)
    }

    pub fn with_concurrency(source: Arc<dyn DataSource>, limit: usize) -> Self {
        Self {
            source,
            permits: Arc::new(Semaphore::new(limit.max(1))),
        }
    }

    /// Fill in `competition_seats` for every candidate, preserving input
    /// order. Each candidate is touched by exactly one task.
    pub async fn enrich(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let mut slots: Vec<Option<Candidate>> = candidates.iter().map(|_| None).collect();
        let mut tasks = JoinSet::new();

        for (idx, mut candidate) in candidates.into_iter().enumerate() {
            let source = Arc::clone(&self.source);
            let permits = Arc::clone(&self.permits);
            tasks.spawn(async move {
                // Closed-semaphore acquire can only fail if the semaphore
                // were dropped, which it never is here.
                let _permit = permits.acquire_owned().await;
                let airport_id = candidate.airport.id;
                candidate.competition_seats = match source.fetch_airport_links(airport_id).await {
                    Ok(links) => total_competition_seats(&links),
                    Err(e) => {
                        tracing::debug!(
                            "links fetch failed for airport {airport_id}, \
                             treating as zero competition: {e}"
                        );
                        0
                    }
                };
                (idx, candidate)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let (idx, candidate) =
                joined.map_err(|e| DomainError::Internal(format!("enrichment task failed: {e}")))?;
            slots[idx] = Some(candidate);
        }

        // Every spawned task filled exactly one slot.
        Ok(slots.into_iter().flatten().collect())
    }
}
