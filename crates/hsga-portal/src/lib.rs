//! Domain services for the HSGA membership portal: admission and registration intake,
//! the admin review workflow, and the organization calendar.

pub mod calendar;
pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod memory;
pub mod repository;
pub mod review;
pub mod telemetry;
