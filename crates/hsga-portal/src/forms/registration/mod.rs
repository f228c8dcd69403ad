//! Institution and trainer registration intake.

pub mod credentials;
pub mod domain;
mod draft;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Institution, InstitutionRegistration, InstitutionType, RecordId, RegistrationStatus,
    Reviewer, ReviewerSummary, TrainerRegistration, UniqueId,
};
pub use repository::{InstitutionRepository, ReviewerRepository};
pub use router::registration_router;
pub use service::{RegistrationError, RegistrationService};
pub use validation::{validate_institution, validate_trainer, RegistrationValidationError};
