use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::Auditor;
use super::repository::{AuditorRepository, RepositoryError};
use crate::ingest::{AuditorImporter, IngestError, IngestReport, RegistrySource, SourceError};

/// Service composing the export source and the repository. One instance
/// backs both API endpoints and the one-off CLI ingestion run.
pub struct RegistryService<S, R> {
    source: Arc<S>,
    repository: Arc<R>,
}

impl<S, R> RegistryService<S, R>
where
    S: RegistrySource + 'static,
    R: AuditorRepository + 'static,
{
    pub fn new(source: Arc<S>, repository: Arc<R>) -> Self {
        Self { source, repository }
    }

    /// Downloads the export, rebuilds the stored directory from it wholesale,
    /// and reports what happened. Prior contents survive any failure: the
    /// repository is only touched once a batch parsed cleanly.
    pub async fn ingest(&self) -> Result<IngestReport, RegistryServiceError> {
        let csv = self.source.fetch_csv().await?;
        let batch = AuditorImporter::from_reader(csv.as_bytes())?;
        let ingested = self.repository.replace_all(batch.auditors)?;

        let report = IngestReport {
            rows: batch.rows,
            ingested,
            skipped: batch.skipped,
            completed_at: Utc::now(),
        };
        info!(
            rows = report.rows,
            ingested = report.ingested,
            skipped = report.skipped,
            "auditor ingestion complete"
        );

        Ok(report)
    }

    /// Ordered snapshot of the stored directory for the list endpoint.
    pub fn auditors(&self) -> Result<Vec<Auditor>, RegistryServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the registry service.
#[derive(Debug, thiserror::Error)]
pub enum RegistryServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
