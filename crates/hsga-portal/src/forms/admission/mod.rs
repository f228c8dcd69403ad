//! Student admission intake: the applicant-side draft and validation rules, and the
//! server-side service that re-checks and stores submitted forms.

pub mod domain;
pub mod draft;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{AdmissionId, AdmissionRecord, AttachmentSlot, FormSubmission};
pub use draft::{AdmissionDraft, AdmissionField, Declarant};
pub use repository::AdmissionRepository;
pub use router::admission_router;
pub use service::{AdmissionService, AdmissionServiceError};
pub use validation::{validate, ValidationError, MIN_ADDRESS_CHARS};
