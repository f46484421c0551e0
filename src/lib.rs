pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use crate::application::report::render_table;
use crate::application::scan::{NetworkScanUseCase, ScanRequest};
use crate::domain::entities::candidate::ScanReport;
use crate::domain::error::Result;
use crate::domain::ports::data_source::DataSource;
use crate::domain::values::scoring::ScoringProfile;
use crate::infrastructure::api::client::ApiClient;

/// Facade wiring the scan pipeline to a data source.
///
/// [`RouteScout::new`] builds the production reqwest adapter, reading the
/// base URL from `ROUTESCOUT_BASE_URL` when set; [`RouteScout::with_source`]
/// is the injection seam tests use to supply a stub.
pub struct RouteScout {
    scan_uc: NetworkScanUseCase,
}

impl RouteScout {
    pub fn new(profile: ScoringProfile) -> Self {
        let client = match std::env::var("ROUTESCOUT_BASE_URL") {
            Ok(base_url) => ApiClient::with_base_url(base_url),
            Err(_) => ApiClient::new(),
        };
        Self::with_source(Arc::new(client), profile)
    }

    pub fn with_source(source: Arc<dyn DataSource>, profile: ScoringProfile) -> Self {
        Self {
            scan_uc: NetworkScanUseCase::new(source, profile),
        }
    }

    /// Run one full scan: fetch, filter, enrich, score, rank.
    pub async fn scan(&self, request: ScanRequest) -> Result<ScanReport> {
        self.scan_uc.execute(request).await
    }

    /// Run one full scan and render the ranked table.
    pub async fn scan_table(&self, request: ScanRequest) -> Result<String> {
        let report = self.scan(request).await?;
        Ok(render_table(&report))
    }
}
