use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tokio::task::JoinError;
use tracing::error;

use super::domain::{InstitutionRegistration, TrainerRegistration, UniqueId};
use super::repository::{InstitutionRepository, ReviewerRepository};
use super::service::{RegistrationError, RegistrationService};
use crate::extract::FormJson;
use crate::forms::pipeline::FormPayload;

/// Router exposing institution and trainer registration.
pub fn registration_router<I, T>(service: Arc<RegistrationService<I, T>>) -> Router
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    Router::new()
        .route(
            InstitutionRegistration::PATH,
            post(institution_handler::<I, T>),
        )
        .route(TrainerRegistration::PATH, post(trainer_handler::<I, T>))
        .with_state(service)
}

pub(crate) async fn institution_handler<I, T>(
    State(service): State<Arc<RegistrationService<I, T>>>,
    FormJson(form): FormJson<InstitutionRegistration>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || {
        service
            .register_institution(form)
            .map(|record| record.unique_id)
    })
    .await;
    registered(outcome)
}

pub(crate) async fn trainer_handler<I, T>(
    State(service): State<Arc<RegistrationService<I, T>>>,
    FormJson(form): FormJson<TrainerRegistration>,
) -> Response
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || {
        service.register_trainer(form).map(|record| record.unique_id)
    })
    .await;
    registered(outcome)
}

/// Registration hashes the password, so it runs on the blocking pool.
fn registered(outcome: Result<Result<UniqueId, RegistrationError>, JoinError>) -> Response {
    match outcome {
        Ok(Ok(unique_id)) => {
            let payload = json!({ "uniqueId": unique_id });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Ok(Err(error)) => {
            let payload = json!({ "error": error.to_string() });
            (error.status_code(), axum::Json(payload)).into_response()
        }
        Err(error) => {
            error!(%error, "registration task did not complete");
            let payload = json!({ "error": "Registration failed" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
