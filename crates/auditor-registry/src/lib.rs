//! Directory of registered company auditors: CSV ingestion into an in-memory
//! registry, the HTTP API that serves it, and the list-view component that
//! consumes the API from the other side of the wire.

pub mod config;
pub mod error;
pub mod ingest;
pub mod registry;
pub mod telemetry;
pub mod view;
