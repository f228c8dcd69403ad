use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::workflow::{ReviewError, ReviewService};
use crate::extract::FormJson;
use crate::forms::registration::{
    InstitutionRepository, RecordId, RegistrationStatus, ReviewerRepository, UniqueId,
};

/// Admin review endpoints for institutions and trainers.
pub fn review_router<I, T>(service: Arc<ReviewService<I, T>>) -> Router
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    Router::new()
        .route("/admin/insti", get(institutions_handler::<I, T>))
        .route("/admin/insti/:id/status", patch(status_handler::<I, T>))
        .route(
            "/admin/insti/:id/assign-trainer",
            patch(assign_handler::<I, T>),
        )
        .route("/admin/trainers", get(reviewers_handler::<I, T>))
        .route(
            "/admin/trainers/approved",
            get(approved_reviewers_handler::<I, T>),
        )
        .route(
            "/admin/trainers/:id/status",
            patch(reviewer_status_handler::<I, T>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChange {
    status: RegistrationStatus,
}

/// `trainerId` of `""` or `null` clears the assignment.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TrainerAssignment {
    #[serde(rename = "trainerId", alias = "reviewerId", default)]
    trainer_id: Option<String>,
}

pub(crate) async fn institutions_handler<I, T>(
    State(service): State<Arc<ReviewService<I, T>>>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    respond(service.institutions(), StatusCode::OK)
}

pub(crate) async fn status_handler<I, T>(
    State(service): State<Arc<ReviewService<I, T>>>,
    Path(id): Path<String>,
    FormJson(change): FormJson<StatusChange>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    respond(
        service.set_status(&RecordId(id), change.status),
        StatusCode::OK,
    )
}

pub(crate) async fn assign_handler<I, T>(
    State(service): State<Arc<ReviewService<I, T>>>,
    Path(id): Path<String>,
    FormJson(assignment): FormJson<TrainerAssignment>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    let reviewer = assignment.trainer_id.map(UniqueId);
    respond(
        service.assign_reviewer(&RecordId(id), reviewer),
        StatusCode::OK,
    )
}

pub(crate) async fn reviewers_handler<I, T>(
    State(service): State<Arc<ReviewService<I, T>>>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    respond(service.reviewers(), StatusCode::OK)
}

pub(crate) async fn approved_reviewers_handler<I, T>(
    State(service): State<Arc<ReviewService<I, T>>>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    respond(service.approved_reviewers(), StatusCode::OK)
}

pub(crate) async fn reviewer_status_handler<I, T>(
    State(service): State<Arc<ReviewService<I, T>>>,
    Path(id): Path<String>,
    FormJson(change): FormJson<StatusChange>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    respond(
        service.set_reviewer_status(&RecordId(id), change.status),
        StatusCode::OK,
    )
}

fn respond<V: serde::Serialize>(outcome: Result<V, ReviewError>, success: StatusCode) -> Response {
    match outcome {
        Ok(value) => (success, Json(value)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (error.status_code(), Json(payload)).into_response()
        }
    }
}
