use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::AuditorRepository;
use super::service::RegistryService;
use crate::ingest::RegistrySource;

/// Router builder exposing the directory list and the ingestion trigger.
pub fn registry_router<S, R>(service: Arc<RegistryService<S, R>>) -> Router
where
    S: RegistrySource + 'static,
    R: AuditorRepository + 'static,
{
    Router::new()
        .route("/api/auditors", get(list_handler::<S, R>))
        .route("/api/auditors/ingest", post(ingest_handler::<S, R>))
        .with_state(service)
}

pub(crate) async fn list_handler<S, R>(
    State(service): State<Arc<RegistryService<S, R>>>,
) -> Response
where
    S: RegistrySource + 'static,
    R: AuditorRepository + 'static,
{
    match service.auditors() {
        Ok(auditors) => (StatusCode::OK, axum::Json(auditors)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn ingest_handler<S, R>(
    State(service): State<Arc<RegistryService<S, R>>>,
) -> Response
where
    S: RegistrySource + 'static,
    R: AuditorRepository + 'static,
{
    match service.ingest().await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": format!("Error during data ingestion: {err}"),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
