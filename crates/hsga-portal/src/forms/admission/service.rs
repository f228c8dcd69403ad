use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use tracing::{info, warn};

use super::domain::{AdmissionId, AdmissionRecord, AttachmentSlot, FormSubmission};
use super::repository::AdmissionRepository;
use super::validation::{validate, ValidationError};
use crate::forms::attachment::FileConstraintError;
use crate::forms::pipeline::{SubmissionReceipt, SubmissionTransport, TransportError};
use crate::repository::RepositoryError;

/// Server-side intake for student admission forms.
pub struct AdmissionService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> AdmissionService<R>
where
    R: AdmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> AdmissionId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        AdmissionId(format!("adm-{id:06}"))
    }

    /// Re-validate and store a submitted form.
    pub fn submit(
        &self,
        submission: FormSubmission,
    ) -> Result<AdmissionRecord, AdmissionServiceError> {
        if let Err(error) = validate(&submission) {
            warn!(field = error.field(), "admission form failed validation");
            return Err(error.into());
        }

        for slot in AttachmentSlot::ALL {
            let image = submission.attachment(slot);
            if image.is_empty() {
                return Err(AdmissionServiceError::MissingAttachment(slot.label()));
            }
            image
                .decode()
                .map_err(|source| AdmissionServiceError::Attachment {
                    slot: slot.label(),
                    source,
                })?;
        }

        let record = AdmissionRecord {
            id: self.next_id(),
            submission,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            id = %stored.id.0,
            district = %stored.submission.district,
            institution = %stored.submission.institution_name,
            "admission form stored"
        );
        Ok(stored)
    }

    /// All stored admission forms, newest first.
    pub fn list(&self) -> Result<Vec<AdmissionRecord>, AdmissionServiceError> {
        let mut records = self.repository.list()?;
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }
}

impl<R> SubmissionTransport<FormSubmission> for AdmissionService<R>
where
    R: AdmissionRepository + 'static,
{
    async fn transmit(
        &self,
        payload: &FormSubmission,
    ) -> Result<SubmissionReceipt, TransportError> {
        match self.submit(payload.clone()) {
            Ok(record) => Ok(SubmissionReceipt {
                unique_id: None,
                id: Some(record.id.0),
            }),
            Err(error) => Err(TransportError::Endpoint {
                status: error.status_code().as_u16(),
                message: error.to_string(),
            }),
        }
    }
}

/// Error raised by the admission service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} image is required.")]
    MissingAttachment(&'static str),
    #[error("{slot}: {source}")]
    Attachment {
        slot: &'static str,
        source: FileConstraintError,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AdmissionServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdmissionServiceError::Validation(_)
            | AdmissionServiceError::MissingAttachment(_)
            | AdmissionServiceError::Attachment { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AdmissionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            AdmissionServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
