use super::domain::{CalendarEvent, EventId};
use crate::repository::RepositoryError;

/// Storage for admin-managed events.
pub trait EventRepository: Send + Sync {
    fn insert(&self, event: CalendarEvent) -> Result<CalendarEvent, RepositoryError>;
    fn list(&self) -> Result<Vec<CalendarEvent>, RepositoryError>;
    /// Remove an event, returning it when it existed.
    fn remove(&self, id: &EventId) -> Result<Option<CalendarEvent>, RepositoryError>;
}
