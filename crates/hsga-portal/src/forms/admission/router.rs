use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::FormSubmission;
use super::repository::AdmissionRepository;
use super::service::AdmissionService;
use crate::extract::FormJson;
use crate::forms::pipeline::FormPayload;

/// Request body limit for admission forms: three attachments at the 1 MiB cap grow by a third
/// once base64-encoded, plus the text fields.
pub const MAX_SUBMISSION_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Router exposing admission intake and the admin listing.
pub fn admission_router<R>(service: Arc<AdmissionService<R>>) -> Router
where
    R: AdmissionRepository + 'static,
{
    Router::new()
        .route(
            FormSubmission::PATH,
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .layer(DefaultBodyLimit::max(MAX_SUBMISSION_BODY_BYTES))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AdmissionService<R>>>,
    FormJson(submission): FormJson<FormSubmission>,
) -> Response
where
    R: AdmissionRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let payload = json!({ "success": true, "id": record.id });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (error.status_code(), axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<AdmissionService<R>>>) -> Response
where
    R: AdmissionRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (error.status_code(), axum::Json(payload)).into_response()
        }
    }
}
