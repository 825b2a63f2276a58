//! Turns the regulator's CSV export into storable auditor records.
//!
//! The export's first row is a header; each data row needs at least six
//! columns, of which we keep the auditor name, the firm, and the registration
//! date (verbatim). Every surviving row gets a freshly minted identifier, so
//! a run always produces a brand-new batch.

mod parser;
mod source;

pub use source::{HttpRegistrySource, RegistrySource, SourceError};

use std::io::Read;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::registry::domain::{Auditor, AuditorId};

/// Reader-level failures. Row-level problems are skipped and counted instead.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("invalid registry CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Parsed rows converted into records, with skip accounting retained.
#[derive(Debug)]
pub struct ImportedBatch {
    pub auditors: Vec<Auditor>,
    pub rows: usize,
    pub skipped: usize,
}

pub struct AuditorImporter;

impl AuditorImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<ImportedBatch, IngestError> {
        let parsed = parser::parse_export(reader)?;

        let auditors = parsed
            .rows
            .into_iter()
            .map(|row| Auditor {
                auditor_id: AuditorId::mint(),
                name: row.name,
                company: row.company,
                registration_date: row.registration_date,
            })
            .collect();

        Ok(ImportedBatch {
            auditors,
            rows: parsed.seen,
            skipped: parsed.skipped,
        })
    }
}

/// Summary of one ingestion run, returned by the trigger endpoint and logged.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub rows: usize,
    pub ingested: usize,
    pub skipped: usize,
    pub completed_at: DateTime<Utc>,
}
