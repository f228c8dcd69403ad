use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use tracing::{info, warn};

use super::credentials::hash_password;
use super::domain::{
    Institution, InstitutionRegistration, RecordId, RegistrationStatus, Reviewer,
    TrainerRegistration, UniqueId,
};
use super::repository::{InstitutionRepository, ReviewerRepository};
use super::validation::{validate_institution, validate_trainer, RegistrationValidationError};
use crate::forms::pipeline::{
    FormPayload, SubmissionReceipt, SubmissionTransport, TransportError,
};
use crate::repository::RepositoryError;

/// Intake for institution and trainer registrations. New records always start `PENDING`.
pub struct RegistrationService<I, T> {
    institutions: Arc<I>,
    reviewers: Arc<T>,
    institution_sequence: AtomicU64,
    reviewer_sequence: AtomicU64,
}

impl<I, T> RegistrationService<I, T>
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    pub fn new(institutions: Arc<I>, reviewers: Arc<T>) -> Self {
        Self {
            institutions,
            reviewers,
            institution_sequence: AtomicU64::new(1),
            reviewer_sequence: AtomicU64::new(1),
        }
    }

    pub fn register_institution(
        &self,
        form: InstitutionRegistration,
    ) -> Result<Institution, RegistrationError> {
        if let Err(error) = validate_institution(&form) {
            warn!(%error, "institution registration failed validation");
            return Err(error.into());
        }
        let kind = form
            .kind
            .ok_or(RegistrationValidationError::InstitutionType)?;

        let email = form.email.trim().to_string();
        let taken = self
            .institutions
            .list()?
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&email));
        if taken {
            return Err(RegistrationError::DuplicateEmail(email));
        }

        let credential_hash = hash_password(&form.password)
            .map_err(|err| RegistrationError::Credential(err.to_string()))?;

        let seq = self.institution_sequence.fetch_add(1, Ordering::Relaxed);
        let record = Institution {
            id: RecordId(format!("inst-{seq:06}")),
            unique_id: UniqueId(format!("HSGA-INST-{seq:04}")),
            name: form.name.trim().to_string(),
            kind,
            contact_name: form.contact_name.trim().to_string(),
            phone: form.phone,
            email: email.clone(),
            district: form.district.trim().to_string(),
            status: RegistrationStatus::Pending,
            assigned_reviewer_id: None,
            credential_hash,
            registered_at: Utc::now(),
        };

        let stored = self.institutions.insert(record).map_err(|error| match error {
            RepositoryError::Conflict => RegistrationError::DuplicateEmail(email),
            other => other.into(),
        })?;
        info!(
            unique_id = %stored.unique_id.0,
            district = %stored.district,
            "institution registered"
        );
        Ok(stored)
    }

    pub fn register_trainer(
        &self,
        form: TrainerRegistration,
    ) -> Result<Reviewer, RegistrationError> {
        if let Err(error) = validate_trainer(&form) {
            warn!(%error, "trainer registration failed validation");
            return Err(error.into());
        }

        let email = form.email.trim().to_string();
        let taken = self
            .reviewers
            .list()?
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&email));
        if taken {
            return Err(RegistrationError::DuplicateEmail(email));
        }

        let credential_hash = hash_password(&form.password)
            .map_err(|err| RegistrationError::Credential(err.to_string()))?;

        let seq = self.reviewer_sequence.fetch_add(1, Ordering::Relaxed);
        let record = Reviewer {
            id: RecordId(format!("trn-{seq:06}")),
            unique_id: UniqueId(format!("HSGA-TR-{seq:04}")),
            full_name: form.full_name.trim().to_string(),
            phone: form.phone,
            email: email.clone(),
            district: form.district.trim().to_string(),
            status: RegistrationStatus::Pending,
            credential_hash,
            registered_at: Utc::now(),
        };

        let stored = self.reviewers.insert(record).map_err(|error| match error {
            RepositoryError::Conflict => RegistrationError::DuplicateEmail(email),
            other => other.into(),
        })?;
        info!(
            unique_id = %stored.unique_id.0,
            district = %stored.district,
            "trainer registered"
        );
        Ok(stored)
    }
}

fn receipt_or_error<P: FormPayload>(
    outcome: Result<UniqueId, RegistrationError>,
) -> Result<SubmissionReceipt, TransportError> {
    match outcome {
        Ok(unique_id) => Ok(SubmissionReceipt {
            unique_id: Some(unique_id.0),
            id: None,
        }),
        Err(error) => {
            let message = match &error {
                RegistrationError::Credential(_) | RegistrationError::Repository(_) => {
                    P::KIND.fallback_error().to_string()
                }
                _ => error.to_string(),
            };
            Err(TransportError::Endpoint {
                status: error.status_code().as_u16(),
                message,
            })
        }
    }
}

impl<I, T> SubmissionTransport<InstitutionRegistration> for RegistrationService<I, T>
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    async fn transmit(
        &self,
        payload: &InstitutionRegistration,
    ) -> Result<SubmissionReceipt, TransportError> {
        let outcome = self
            .register_institution(payload.clone())
            .map(|record| record.unique_id);
        receipt_or_error::<InstitutionRegistration>(outcome)
    }
}

impl<I, T> SubmissionTransport<TrainerRegistration> for RegistrationService<I, T>
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    async fn transmit(
        &self,
        payload: &TrainerRegistration,
    ) -> Result<SubmissionReceipt, TransportError> {
        let outcome = self
            .register_trainer(payload.clone())
            .map(|record| record.unique_id);
        receipt_or_error::<TrainerRegistration>(outcome)
    }
}

/// Error raised by registration intake.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] RegistrationValidationError),
    #[error("{0} is already registered")]
    DuplicateEmail(String),
    #[error("could not secure password: {0}")]
    Credential(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RegistrationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistrationError::DuplicateEmail(_)
            | RegistrationError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            RegistrationError::Credential(_) | RegistrationError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
