use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::calendar::domain::{CalendarEvent, EventId, NewEvent};
use crate::calendar::repository::EventRepository;
use crate::calendar::service::CalendarService;
use crate::memory::InMemoryEventRepository;
use crate::repository::RepositoryError;

pub(super) fn rally(date: &str) -> NewEvent {
    NewEvent {
        title: "District Scout Rally".to_string(),
        date: date.to_string(),
        description: Some("Camp-fire and march past".to_string()),
    }
}

pub(super) fn build_service() -> (
    CalendarService<InMemoryEventRepository>,
    Arc<InMemoryEventRepository>,
) {
    let repository = Arc::new(InMemoryEventRepository::default());
    let service = CalendarService::new(repository.clone());
    (service, repository)
}

pub(super) struct UnavailableRepository;

impl EventRepository for UnavailableRepository {
    fn insert(&self, _event: CalendarEvent) -> Result<CalendarEvent, RepositoryError> {
        Err(RepositoryError::Unavailable("events table missing".to_string()))
    }

    fn list(&self) -> Result<Vec<CalendarEvent>, RepositoryError> {
        Err(RepositoryError::Unavailable("events table missing".to_string()))
    }

    fn remove(&self, _id: &EventId) -> Result<Option<CalendarEvent>, RepositoryError> {
        Err(RepositoryError::Unavailable("events table missing".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
