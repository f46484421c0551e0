use thiserror::Error;

/// Failure categories for a scan run. A run either fully succeeds with a
/// report or fails with exactly one of these; there is no partial-success
/// result and no retry inside the pipeline.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Network error, timeout, or non-2xx from the upstream API during a
    /// bulk fetch. Per-candidate enrichment failures are absorbed as zero
    /// competition and never surface here.
    #[error("Data unavailable: {0}")]
    Upstream(String),

    /// The requested HQ airport could not be resolved.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Filtering or scoring left nothing to rank.
    #[error("No results: {0}")]
    EmptyResult(String),

    /// Anything unexpected caught at the orchestrator boundary.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Upstream(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Upstream(format!("malformed upstream payload: {e}"))
    }
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Internal(s)
    }
}
