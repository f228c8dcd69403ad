use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CalendarError, NewEvent};
use super::grid::MonthCursor;
use super::repository::EventRepository;
use super::service::{CalendarService, MonthView};
use crate::error::AppError;
use crate::extract::FormJson;

/// Router exposing the event store and the public month grid.
pub fn calendar_router<R>(service: Arc<CalendarService<R>>) -> Router
where
    R: EventRepository + 'static,
{
    Router::new()
        .route(
            "/events",
            get(list_handler::<R>)
                .post(create_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route("/calendar/:year/:month", get(month_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeleteParams {
    id: Option<String>,
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<CalendarService<R>>>) -> Response
where
    R: EventRepository + 'static,
{
    match service.list() {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<CalendarService<R>>>,
    FormJson(form): FormJson<NewEvent>,
) -> Response
where
    R: EventRepository + 'static,
{
    match service.create(form) {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<CalendarService<R>>>,
    Query(params): Query<DeleteParams>,
) -> Response
where
    R: EventRepository + 'static,
{
    match service.delete(params.id.as_deref()) {
        Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(error) => failure(error),
    }
}

pub(crate) async fn month_handler<R>(
    State(service): State<Arc<CalendarService<R>>>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Result<Json<MonthView>, AppError>
where
    R: EventRepository + 'static,
{
    let Path((year, month)) = path?;
    let cursor = MonthCursor::new(year, month)?;
    Ok(Json(service.month_view(cursor)?))
}

fn failure(error: CalendarError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}
