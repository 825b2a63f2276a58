//! The auditor directory proper: record type, storage seam, the service that
//! ties ingestion to storage, and the HTTP surface over both.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Auditor, AuditorId};
pub use repository::{AuditorRepository, RepositoryError};
pub use router::registry_router;
pub use service::{RegistryService, RegistryServiceError};
