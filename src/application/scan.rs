//! Network scan use case.
//!
//! One invocation runs the full fetch -> filter -> enrich -> score ->
//! rank cycle and produces a [`ScanReport`]. No mutable state is shared
//! across runs except whatever cache the injected data source keeps.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::application::enrich::Enricher;
use crate::domain::entities::airport::Airport;
use crate::domain::entities::candidate::{Candidate, ScanReport, ScoredCandidate};
use crate::domain::error::{DomainError, Result};
use crate::domain::ports::data_source::DataSource;
use crate::domain::values::geo::haversine_km;
use crate::domain::values::scoring::{opportunity_score, ScoringProfile};

/// How many ranked candidates a report carries at most.
pub const TOP_N: usize = 15;

/// Parameters for one scan run, as supplied by the front end.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// IATA code of the headquarters airport, case-insensitive.
    pub hq_code: String,
    /// Minimum country openness (0-10) a candidate must have.
    pub min_openness: i32,
    /// Maximum great-circle distance from HQ in km.
    pub max_distance_km: f64,
}

pub struct NetworkScanUseCase {
    source: Arc<dyn DataSource>,
    enricher: Enricher,
    profile: ScoringProfile,
}

impl NetworkScanUseCase {
    pub fn new(source: Arc<dyn DataSource>, profile: ScoringProfile) -> Self {
        let enricher = Enricher::new(Arc::clone(&source));
        Self {
            source,
            enricher,
            profile,
        }
    }

    /// Test seam: cap the enrichment fan-out below the default.
    pub fn with_concurrency(
        source: Arc<dyn DataSource>,
        profile: ScoringProfile,
        limit: usize,
    ) -> Self {
        let enricher = Enricher::with_concurrency(Arc::clone(&source), limit);
        Self {
            source,
            enricher,
            profile,
        }
    }

    pub async fn execute(&self, request: ScanRequest) -> Result<ScanReport> {
        let hq_code = request.hq_code.to_uppercase();
        tracing::info!(
            "scan start: hq={hq_code} min_openness={} max_distance={}km profile={}",
            request.min_openness,
            request.max_distance_km,
            self.profile
        );

        // Both bulk collections must land before filtering can start.
        let (countries, airports) =
            tokio::try_join!(self.source.fetch_countries(), self.source.fetch_airports())?;

        let openness_by_country: HashMap<&str, i32> = countries
            .iter()
            .map(|c| (c.country_code.as_str(), c.openness))
            .collect();

        let hq = airports
            .iter()
            .find(|a| a.iata.eq_ignore_ascii_case(&hq_code))
            .cloned()
            .ok_or_else(|| {
                DomainError::NotFound(format!("airport with IATA code '{hq_code}' not found"))
            })?;

        let candidates = self.filter(&hq, &airports, &openness_by_country, &request);
        if candidates.is_empty() {
            return Err(DomainError::EmptyResult(format!(
                "no airports match the criteria (openness >= {}, distance <= {} km)",
                request.min_openness, request.max_distance_km
            )));
        }
        let candidates_considered = candidates.len();
        tracing::debug!("{candidates_considered} candidates after filtering");

        let enriched = self.enricher.enrich(candidates).await?;

        let params = self.profile.params();
        let mut scored: Vec<ScoredCandidate> = enriched
            .into_iter()
            .filter_map(|candidate| {
                opportunity_score(
                    candidate.airport.population,
                    candidate.airport.income_level,
                    candidate.competition_seats,
                    candidate.distance_km,
                    candidate.openness as f64,
                    &params,
                )
                .map(|score| ScoredCandidate { candidate, score })
            })
            .collect();

        if scored.is_empty() {
            return Err(DomainError::EmptyResult(
                "no airports produced a valid score (need positive population and income)".into(),
            ));
        }
        let candidates_scored = scored.len();

        // Stable sort: ties keep input order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(TOP_N);

        tracing::info!(
            "scan done: {candidates_scored} scored, reporting top {}",
            scored.len()
        );

        Ok(ScanReport {
            scanned_at: Utc::now(),
            hq_iata: hq.iata.clone(),
            hq_name: hq.name.clone(),
            min_openness: request.min_openness,
            max_distance_km: request.max_distance_km,
            profile: self.profile.to_string(),
            candidates_considered,
            candidates_scored,
            ranked: scored,
        })
    }

    fn filter(
        &self,
        hq: &Airport,
        airports: &[Airport],
        openness_by_country: &HashMap<&str, i32>,
        request: &ScanRequest,
    ) -> Vec<Candidate> {
        airports
            .iter()
            .filter(|a| a.id != hq.id)
            .filter_map(|airport| {
                // Airports in countries missing from /countries count as
                // fully closed (openness 0).
                let openness = openness_by_country
                    .get(airport.country_code.as_str())
                    .copied()
                    .unwrap_or(0);
                if openness < request.min_openness {
                    return None;
                }

                let distance_km = haversine_km(
                    hq.latitude,
                    hq.longitude,
                    airport.latitude,
                    airport.longitude,
                );
                if distance_km > request.max_distance_km {
                    return None;
                }

                Some(Candidate {
                    airport: airport.clone(),
                    distance_km,
                    openness,
                    competition_seats: 0,
                })
            })
            .collect()
    }
}
