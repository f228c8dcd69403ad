//! Month grid layout: leading blanks up to the weekday of day 1 (Sunday first), then one
//! cell per day carrying that day's events.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::domain::{CalendarError, CalendarEvent};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    Blank,
    Day {
        day: u32,
        date: NaiveDate,
        events: Vec<CalendarEvent>,
    },
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        match self {
            CalendarCell::Blank => &[],
            CalendarCell::Day { events, .. } => events,
        }
    }
}

/// Lay out `month` of `year`. Events are matched by exact date; duplicates are kept in
/// input order.
pub fn layout(
    year: i32,
    month: u32,
    events: &[CalendarEvent],
) -> Result<Vec<CalendarCell>, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let total = days_in_month(first);

    let mut cells = Vec::with_capacity(leading + total as usize);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(leading));
    for date in first.iter_days().take(total as usize) {
        let day_events = events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect();
        cells.push(CalendarCell::Day {
            day: date.day(),
            date,
            events: day_events,
        });
    }
    Ok(cells)
}

fn min_year() -> i32 {
    NaiveDate::MIN.year()
}

fn max_year() -> i32 {
    NaiveDate::MAX.year()
}

fn days_in_month(first: NaiveDate) -> u32 {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // December of the last representable year.
        None => 31,
    }
}

/// Displayed month. Navigation is unbounded in both directions up to the years chrono can
/// represent; stepping past either end leaves the cursor where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || !(min_year()..=max_year()).contains(&year) {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 && self.year == max_year() {
            return self;
        }
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 && self.year == min_year() {
            return self;
        }
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// e.g. "January 2026".
    pub fn label(&self) -> String {
        let name = MONTH_NAMES[(self.month - 1) as usize];
        format!("{name} {}", self.year)
    }

    pub fn layout(&self, events: &[CalendarEvent]) -> Result<Vec<CalendarCell>, CalendarError> {
        layout(self.year, self.month, events)
    }
}
