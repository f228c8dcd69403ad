//! Organization calendar: the admin event store, the built-in 2026 circular, and the
//! public month grid.

pub mod domain;
pub mod fallback;
pub mod grid;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CalendarError, CalendarEvent, EventId, NewEvent};
pub use fallback::fallback_events;
pub use grid::{layout, CalendarCell, MonthCursor};
pub use repository::EventRepository;
pub use router::calendar_router;
pub use service::{CalendarService, MonthView};
