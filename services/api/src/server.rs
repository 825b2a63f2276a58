use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAuditorRepository};
use crate::routes::app_router;
use auditor_registry::config::AppConfig;
use auditor_registry::error::AppError;
use auditor_registry::ingest::HttpRegistrySource;
use auditor_registry::registry::RegistryService;
use auditor_registry::telemetry;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = Arc::new(HttpRegistrySource::new(config.ingest.source_url.clone()));
    let repository = Arc::new(InMemoryAuditorRepository::default());
    let registry_service = Arc::new(RegistryService::new(source, repository));

    let app = app_router(registry_service, app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "auditor registry service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
