use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{info, warn};

use crate::forms::registration::{
    Institution, InstitutionRepository, RecordId, RegistrationStatus, Reviewer, ReviewerRepository,
    ReviewerSummary, UniqueId,
};
use crate::repository::RepositoryError;

/// Admin review of registered institutions and trainers.
///
/// Each operation is a single read-modify-write against the repositories. Concurrent admin
/// actions are not coordinated; the last write wins.
pub struct ReviewService<I, T> {
    institutions: Arc<I>,
    reviewers: Arc<T>,
}

impl<I, T> ReviewService<I, T>
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    pub fn new(institutions: Arc<I>, reviewers: Arc<T>) -> Self {
        Self {
            institutions,
            reviewers,
        }
    }

    pub fn institutions(&self) -> Result<Vec<Institution>, ReviewError> {
        Ok(self.institutions.list()?)
    }

    pub fn reviewers(&self) -> Result<Vec<Reviewer>, ReviewError> {
        Ok(self.reviewers.list()?)
    }

    /// Trainers that may be assigned to an institution.
    pub fn approved_reviewers(&self) -> Result<Vec<ReviewerSummary>, ReviewError> {
        Ok(self
            .reviewers
            .list()?
            .iter()
            .filter(|reviewer| reviewer.status == RegistrationStatus::Approved)
            .map(Reviewer::summary)
            .collect())
    }

    /// Move an institution to `status`. Any existing trainer assignment is kept.
    pub fn set_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> Result<Institution, ReviewError> {
        let mut record = self.institution(id)?;
        let previous = record.status;
        record.status = status;
        self.institutions.update(record.clone())?;

        info!(
            id = %id,
            unique_id = %record.unique_id,
            from = previous.label(),
            to = status.label(),
            "institution status changed"
        );
        Ok(record)
    }

    /// Assign (or with `None`/an empty id, clear) the institution's trainer. The institution
    /// must be `APPROVED` and the trainer must be an approved reviewer.
    pub fn assign_reviewer(
        &self,
        id: &RecordId,
        reviewer: Option<UniqueId>,
    ) -> Result<Institution, ReviewError> {
        let mut record = self.institution(id)?;
        if record.status != RegistrationStatus::Approved {
            warn!(id = %id, status = record.status.label(), "assignment refused");
            return Err(ReviewError::NotApproved {
                id: id.clone(),
                status: record.status,
            });
        }

        let reviewer = reviewer.filter(|candidate| !candidate.0.trim().is_empty());
        if let Some(candidate) = &reviewer {
            let approved = self
                .approved_reviewers()?
                .iter()
                .any(|summary| &summary.unique_id == candidate);
            if !approved {
                warn!(id = %id, reviewer = %candidate, "assignment to unapproved trainer refused");
                return Err(ReviewError::UnknownReviewer(candidate.clone()));
            }
        }

        record.assigned_reviewer_id = reviewer;
        self.institutions.update(record.clone())?;

        match &record.assigned_reviewer_id {
            Some(reviewer) => info!(id = %id, reviewer = %reviewer, "trainer assigned"),
            None => info!(id = %id, "trainer assignment cleared"),
        }
        Ok(record)
    }

    pub fn set_reviewer_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> Result<Reviewer, ReviewError> {
        let mut record = self
            .reviewers
            .fetch(id)?
            .ok_or_else(|| ReviewError::ReviewerNotFound(id.clone()))?;
        let previous = record.status;
        record.status = status;
        self.reviewers.update(record.clone())?;

        info!(
            id = %id,
            unique_id = %record.unique_id,
            from = previous.label(),
            to = status.label(),
            "trainer status changed"
        );
        Ok(record)
    }

    fn institution(&self, id: &RecordId) -> Result<Institution, ReviewError> {
        self.institutions
            .fetch(id)?
            .ok_or_else(|| ReviewError::InstitutionNotFound(id.clone()))
    }
}

/// Error raised by the review workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("institution {0} not found")]
    InstitutionNotFound(RecordId),
    #[error("trainer {0} not found")]
    ReviewerNotFound(RecordId),
    #[error("institution {id} is {} and must be APPROVED before a trainer is assigned", .status.label())]
    NotApproved {
        id: RecordId,
        status: RegistrationStatus,
    },
    #[error("{0} is not an approved trainer")]
    UnknownReviewer(UniqueId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::InstitutionNotFound(_)
            | ReviewError::ReviewerNotFound(_)
            | ReviewError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            ReviewError::NotApproved { .. }
            | ReviewError::UnknownReviewer(_)
            | ReviewError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            ReviewError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
