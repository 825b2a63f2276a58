//! View-model for the auditor directory screen.
//!
//! Owns the displayed list, an in-flight flag, and the latest error or
//! confirmation. Both operations run to completion and fold their outcome
//! into this state; nothing here is fatal, and the view stays usable after
//! any failure. Rendering belongs to whoever holds the view.

mod client;

pub use client::{ClientError, RegistryApi};

use serde_json::Value;

/// Record as served by the backend. The shape is the backend's business;
/// rows are passed through untouched into the rendered list.
pub type AuditorRecord = Value;

const INGESTION_STARTED_NOTICE: &str =
    "Data ingestion started successfully. Refresh the list in a moment to see the data.";

pub struct AuditorListView {
    api: RegistryApi,
    auditors: Vec<AuditorRecord>,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl AuditorListView {
    pub fn new(api: RegistryApi) -> Self {
        Self {
            api,
            auditors: Vec::new(),
            loading: false,
            error: None,
            notice: None,
        }
    }

    /// Builds the view and runs the initial fetch, as the screen does on
    /// mount.
    pub async fn mount(api: RegistryApi) -> Self {
        let mut view = Self::new(api);
        view.fetch_auditors().await;
        view
    }

    /// Refreshes the list from the backend. On success the list is replaced
    /// wholesale; on any failure it is left exactly as it was and the error
    /// banner is set instead.
    pub async fn fetch_auditors(&mut self) {
        self.begin_request();
        match self.api.fetch_auditors().await {
            Ok(auditors) => self.auditors = auditors,
            Err(err) => self.error = Some(format!("Failed to fetch auditors: {err}")),
        }
        self.loading = false;
    }

    /// Asks the backend to rebuild its data. On success the displayed list
    /// is cleared — a deliberate go-stale signal, not new data — and the
    /// confirmation notice is set; the caller refreshes when it wants the
    /// result.
    pub async fn ingest_data(&mut self) {
        self.begin_request();
        match self.api.start_ingestion().await {
            Ok(()) => {
                self.notice = Some(INGESTION_STARTED_NOTICE.to_string());
                self.auditors.clear();
            }
            Err(err) => self.error = Some(format!("Failed to start ingestion: {err}")),
        }
        self.loading = false;
    }

    fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    pub fn auditors(&self) -> &[AuditorRecord] {
        &self.auditors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn api(&self) -> &RegistryApi {
        &self.api
    }
}
