//! Per-run pipeline records.
//!
//! A [`Candidate`] is an airport that survived filtering, annotated with
//! the distance from HQ and its country's openness; the enrichment stage
//! later fills in `competition_seats`. Candidates live for exactly one
//! scan and are owned by the orchestrator throughout.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::airport::Airport;

/// An airport under consideration within a single scan.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub airport: Airport,
    /// Great-circle distance from the HQ airport, km.
    pub distance_km: f64,
    /// Openness of the airport's country (0 when the country is unknown).
    pub openness: i32,
    /// Aggregate seat capacity of existing links at this airport.
    /// Zero until the enrichment stage runs, and zero when the links
    /// fetch for this airport fails or returns an unusable shape.
    pub competition_seats: u64,
}

/// A candidate that produced a valid opportunity score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f64,
}

/// Result of one full scan run.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    pub hq_iata: String,
    pub hq_name: String,
    pub min_openness: i32,
    pub max_distance_km: f64,
    /// Name of the scoring profile the run was scored with.
    pub profile: String,
    /// Airports that survived filtering and entered enrichment.
    pub candidates_considered: usize,
    /// Candidates with a usable demand signal (scoreable).
    pub candidates_scored: usize,
    /// Top candidates, descending by score, capped at the ranking limit.
    pub ranked: Vec<ScoredCandidate>,
}
