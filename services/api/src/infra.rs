use auditor_registry::registry::{Auditor, AuditorRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

/// Shared handles the ops endpoints read: the readiness flag flipped once the
/// listener is bound, and the Prometheus render handle.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

/// The registry's backing store. A `Vec` rather than a map: the list endpoint
/// serves rows in the order the ingestion stored them, and that order is part
/// of the contract.
#[derive(Default, Clone)]
pub struct InMemoryAuditorRepository {
    records: Arc<Mutex<Vec<Auditor>>>,
}

impl AuditorRepository for InMemoryAuditorRepository {
    fn replace_all(&self, auditors: Vec<Auditor>) -> Result<usize, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("registry mutex poisoned".to_string()))?;
        *guard = auditors;
        Ok(guard.len())
    }

    fn list(&self) -> Result<Vec<Auditor>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("registry mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }
}
