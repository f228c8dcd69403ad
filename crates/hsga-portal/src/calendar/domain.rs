use std::fmt;

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repository::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub String);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Organization event. Built-in events carry no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Admin form for a new event. `date` is kept as entered (`YYYY-MM-DD`) and parsed on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub description: Option<String>,
}

/// Error raised by the calendar grid and event store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("{year}-{month:02} is not a calendar month")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Event date must be in YYYY-MM-DD format, got {0:?}")]
    InvalidDate(String),
    #[error("Event title is required")]
    MissingTitle,
    #[error("Event id is required")]
    MissingId,
    #[error("event {0} not found")]
    NotFound(EventId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CalendarError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CalendarError::InvalidMonth { .. }
            | CalendarError::InvalidDate(_)
            | CalendarError::MissingTitle
            | CalendarError::MissingId => StatusCode::BAD_REQUEST,
            CalendarError::NotFound(_) | CalendarError::Repository(RepositoryError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            CalendarError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
