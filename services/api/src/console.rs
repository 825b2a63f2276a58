use auditor_registry::config::AppConfig;
use auditor_registry::error::AppError;
use auditor_registry::ingest::HttpRegistrySource;
use auditor_registry::registry::RegistryService;
use auditor_registry::telemetry;
use auditor_registry::view::{AuditorListView, RegistryApi};
use clap::Args;
use serde_json::Value;
use std::sync::Arc;

use crate::infra::InMemoryAuditorRepository;

#[derive(Args, Debug, Default)]
pub(crate) struct IngestArgs {
    /// Override the configured registry export URL
    #[arg(long)]
    pub(crate) source_url: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ConsoleArgs {
    /// Override the configured API base URL
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    /// Trigger an ingestion run, then refresh the list
    #[arg(long)]
    pub(crate) ingest: bool,
}

/// Downloads and parses the configured export once and prints the outcome.
/// The batch lives in a throwaway in-memory store, so this is a dry run of
/// the same path the service's trigger endpoint takes.
pub(crate) async fn run_ingest(mut args: IngestArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(url) = args.source_url.take() {
        config.ingest.source_url = url;
    }

    telemetry::init(&config.telemetry)?;

    let source = Arc::new(HttpRegistrySource::new(config.ingest.source_url.clone()));
    let repository = Arc::new(InMemoryAuditorRepository::default());
    let registry_service = RegistryService::new(source, repository);

    let report = registry_service.ingest().await?;

    println!("Ingestion run against {}", config.ingest.source_url);
    println!("- {} rows read", report.rows);
    println!("- {} auditors ingested", report.ingested);
    println!("- {} rows skipped", report.skipped);

    Ok(())
}

/// Console rendition of the auditor list screen: mount, render, and with
/// `--ingest` walk the trigger-then-refresh cycle a user would click through.
pub(crate) async fn run_console(mut args: ConsoleArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(base_url) = args.base_url.take() {
        config.client.api_base_url = base_url;
    }

    let api = RegistryApi::new(config.client.api_base_url.clone());
    let mut view = AuditorListView::mount(api).await;
    render(&view);

    if args.ingest {
        println!();
        view.ingest_data().await;
        render(&view);

        println!();
        view.fetch_auditors().await;
        render(&view);
    }

    Ok(())
}

fn render(view: &AuditorListView) {
    if let Some(notice) = view.notice() {
        println!("{notice}");
    }
    if let Some(error) = view.error() {
        println!("Error: {error}");
    }

    println!("Auditors ({})", view.auditors().len());
    for record in view.auditors() {
        println!(
            "- {} | {} | registered {}",
            field(record, "name"),
            field(record, "company"),
            field(record, "registration_date")
        );
    }
}

// Records are opaque to the view; pull the known columns out leniently and
// show a placeholder for anything the backend did not send.
fn field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("-")
}
