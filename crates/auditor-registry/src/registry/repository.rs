use super::domain::Auditor;

/// Storage abstraction so the service and router can be exercised in
/// isolation. Implementations must preserve insertion order: the list
/// endpoint serves rows in the order the ingestion stored them.
pub trait AuditorRepository: Send + Sync {
    /// Drops whatever is stored and keeps the given batch instead, returning
    /// the number of records now held.
    fn replace_all(&self, auditors: Vec<Auditor>) -> Result<usize, RepositoryError>;

    /// Ordered snapshot of every stored record.
    fn list(&self) -> Result<Vec<Auditor>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
