//! Boots the real application router on an ephemeral port and drives it with
//! the list-view client: the full wire round trip from export download to
//! rendered list.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use auditor_registry::ingest::HttpRegistrySource;
use auditor_registry::registry::RegistryService;
use auditor_registry::view::{AuditorListView, RegistryApi};
use auditor_registry_api::infra::{AppState, InMemoryAuditorRepository};
use auditor_registry_api::routes::app_router;
use metrics_exporter_prometheus::PrometheusBuilder;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPORT: &str = "Number,Name,Firm,Address,State,Registered Date,Status\n\
100001,SMITH JOHN,SMITH & CO,1 MAIN ST,NSW,14/02/2005,Registered\n\
100002,LEE ANNA,LEE AUDIT,2 HIGH ST,VIC,03/09/2011,Registered\n";

async fn export_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reg_auditor.csv"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

async fn spawn_service(source_url: String) -> String {
    let source = Arc::new(HttpRegistrySource::new(source_url));
    let repository = Arc::new(InMemoryAuditorRepository::default());
    let service = Arc::new(RegistryService::new(source, repository));

    let recorder = PrometheusBuilder::new().build_recorder();
    let state = AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(recorder.handle()),
    };
    let app = app_router(service, state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn ingest_then_refresh_shows_the_stored_directory() {
    let export = export_server(ResponseTemplate::new(200).set_body_string(EXPORT)).await;
    let base_url = spawn_service(format!("{}/reg_auditor.csv", export.uri())).await;

    let mut view = AuditorListView::mount(RegistryApi::new(base_url)).await;
    assert!(view.auditors().is_empty(), "nothing stored before ingestion");
    assert!(view.error().is_none());

    view.ingest_data().await;
    assert!(view.error().is_none());
    assert!(view.notice().is_some(), "confirmation notice shown");
    assert!(view.auditors().is_empty(), "list goes stale until refreshed");

    view.fetch_auditors().await;
    let auditors = view.auditors();
    assert_eq!(auditors.len(), 2);
    assert_eq!(auditors[0]["name"], "SMITH JOHN");
    assert_eq!(auditors[0]["company"], "SMITH & CO");
    assert_eq!(auditors[0]["registration_date"], "14/02/2005");
    assert_eq!(auditors[1]["name"], "LEE ANNA");
}

#[tokio::test]
async fn failing_export_surfaces_as_the_ingestion_banner() {
    let export = export_server(ResponseTemplate::new(500)).await;
    let base_url = spawn_service(format!("{}/reg_auditor.csv", export.uri())).await;

    let mut view = AuditorListView::mount(RegistryApi::new(base_url)).await;
    view.ingest_data().await;

    assert_eq!(
        view.error(),
        Some("Failed to start ingestion: Server returned status: 500")
    );
    assert!(view.notice().is_none());
    assert!(!view.is_loading());
}
