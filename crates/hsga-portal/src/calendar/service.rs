use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{CalendarError, CalendarEvent, EventId, NewEvent};
use super::fallback::fallback_events;
use super::grid::{CalendarCell, MonthCursor};
use super::repository::EventRepository;

/// Month grid as served to the public calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub cells: Vec<CalendarCell>,
}

pub struct CalendarService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> CalendarService<R>
where
    R: EventRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn create(&self, form: NewEvent) -> Result<CalendarEvent, CalendarError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(CalendarError::MissingTitle);
        }
        let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidDate(form.date.clone()))?;
        let description = form
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let event = CalendarEvent {
            id: Some(EventId(format!("evt-{seq:06}"))),
            title: title.to_string(),
            date,
            description,
        };
        let stored = self.repository.insert(event)?;
        info!(title = %stored.title, date = %stored.date, "calendar event created");
        Ok(stored)
    }

    /// Stored events, date ascending.
    pub fn list(&self) -> Result<Vec<CalendarEvent>, CalendarError> {
        let mut events = self.repository.list()?;
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(events)
    }

    pub fn delete(&self, id: Option<&str>) -> Result<CalendarEvent, CalendarError> {
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() => EventId(id.to_string()),
            _ => return Err(CalendarError::MissingId),
        };
        match self.repository.remove(&id)? {
            Some(event) => {
                info!(id = %id, "calendar event deleted");
                Ok(event)
            }
            None => {
                warn!(id = %id, "delete requested for unknown event");
                Err(CalendarError::NotFound(id))
            }
        }
    }

    /// Built-in events followed by stored ones; the same event may appear twice. When the
    /// store cannot be read the built-in events are returned alone.
    pub fn merged_events(&self) -> Vec<CalendarEvent> {
        let mut events = fallback_events();
        match self.list() {
            Ok(stored) => events.extend(stored),
            Err(error) => warn!(%error, "stored events unavailable, showing built-in events"),
        }
        events
    }

    pub fn month_view(&self, cursor: MonthCursor) -> Result<MonthView, CalendarError> {
        let events = self.merged_events();
        Ok(MonthView {
            year: cursor.year(),
            month: cursor.month(),
            label: cursor.label(),
            cells: cursor.layout(&events)?,
        })
    }
}
