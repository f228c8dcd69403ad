//! Admin review and approval of registered institutions and trainers.

pub mod board;
pub mod router;
pub mod session;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use board::{AdminConsole, BoardError, ReviewBoard};
pub use router::review_router;
pub use session::session_router;
pub use workflow::{ReviewError, ReviewService};
