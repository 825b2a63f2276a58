//! The registry router over stubbed collaborators: list and trigger
//! round-trips, error mapping, and the order guarantee of the list endpoint.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use auditor_registry::ingest::{RegistrySource, SourceError};
use auditor_registry::registry::{
    registry_router, Auditor, AuditorId, AuditorRepository, RegistryService, RepositoryError,
};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

const EXPORT: &str = "Number,Name,Firm,Address,State,Registered Date,Status\n\
100001,SMITH JOHN,SMITH & CO,1 MAIN ST,NSW,14/02/2005,Registered\n\
100002,LEE ANNA,LEE AUDIT,2 HIGH ST,VIC,03/09/2011,Registered\n";

struct StaticExport(&'static str);

#[async_trait]
impl RegistrySource for StaticExport {
    async fn fetch_csv(&self) -> Result<String, SourceError> {
        Ok(self.0.to_string())
    }
}

struct UnreachableExport;

#[async_trait]
impl RegistrySource for UnreachableExport {
    async fn fetch_csv(&self) -> Result<String, SourceError> {
        Err(SourceError::Status { status: 502 })
    }
}

#[derive(Default)]
struct VecRepository {
    records: Mutex<Vec<Auditor>>,
}

impl AuditorRepository for VecRepository {
    fn replace_all(&self, auditors: Vec<Auditor>) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        *guard = auditors;
        Ok(guard.len())
    }

    fn list(&self) -> Result<Vec<Auditor>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

fn router_with<S: RegistrySource + 'static>(
    source: S,
    repository: Arc<VecRepository>,
) -> axum::Router {
    registry_router(Arc::new(RegistryService::new(Arc::new(source), repository)))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn get_auditors() -> Request<Body> {
    Request::builder()
        .uri("/api/auditors")
        .body(Body::empty())
        .expect("request builds")
}

fn post_ingest() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auditors/ingest")
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn list_serves_the_stored_directory_in_order() {
    let repository = Arc::new(VecRepository::default());
    repository
        .replace_all(vec![
            Auditor {
                auditor_id: AuditorId::mint(),
                name: "ZHU WEI".to_string(),
                company: "ZHU PARTNERS".to_string(),
                registration_date: "01/01/2010".to_string(),
            },
            Auditor {
                auditor_id: AuditorId::mint(),
                name: "ADAMS KIM".to_string(),
                company: "ADAMS AUDIT".to_string(),
                registration_date: "05/06/2018".to_string(),
            },
        ])
        .expect("seed repository");
    let app = router_with(StaticExport(EXPORT), repository);

    let response = app.oneshot(get_auditors()).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let records = body_json(response).await;
    // Stored order, not alphabetical.
    assert_eq!(records[0]["name"], "ZHU WEI");
    assert_eq!(records[1]["name"], "ADAMS KIM");
}

#[tokio::test]
async fn trigger_rebuilds_the_directory_and_reports_counts() {
    let repository = Arc::new(VecRepository::default());
    let app = router_with(StaticExport(EXPORT), repository.clone());

    let response = app
        .clone()
        .oneshot(post_ingest())
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await;
    assert_eq!(report["rows"], 2);
    assert_eq!(report["ingested"], 2);
    assert_eq!(report["skipped"], 0);
    assert!(report["completed_at"].is_string());

    let stored = repository.list().expect("list succeeds");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].name, "SMITH JOHN");
}

#[tokio::test]
async fn failed_trigger_maps_to_500_and_leaves_the_store_alone() {
    let repository = Arc::new(VecRepository::default());
    repository
        .replace_all(vec![Auditor {
            auditor_id: AuditorId::mint(),
            name: "KEPT ROW".to_string(),
            company: "KEPT & CO".to_string(),
            registration_date: "02/02/2002".to_string(),
        }])
        .expect("seed repository");
    let app = router_with(UnreachableExport, repository.clone());

    let response = app.oneshot(post_ingest()).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = body_json(response).await;
    let message = payload["error"].as_str().expect("error message present");
    assert!(
        message.starts_with("Error during data ingestion: "),
        "unexpected message: {message}"
    );

    let stored = repository.list().expect("list succeeds");
    assert_eq!(stored.len(), 1, "prior contents survive a failed run");
    assert_eq!(stored[0].name, "KEPT ROW");
}
