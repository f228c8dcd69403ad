use super::domain::{Institution, RecordId, Reviewer};
use crate::repository::RepositoryError;

/// Institution storage shared by registration intake and the review workflow.
pub trait InstitutionRepository: Send + Sync {
    /// Refuses a record whose id or email (case-insensitive) is already stored with
    /// `Conflict`; the check and the write happen atomically.
    fn insert(&self, record: Institution) -> Result<Institution, RepositoryError>;
    fn update(&self, record: Institution) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<Institution>, RepositoryError>;
    fn list(&self) -> Result<Vec<Institution>, RepositoryError>;
}

/// Trainer (reviewer) storage.
pub trait ReviewerRepository: Send + Sync {
    /// Same uniqueness rule as [`InstitutionRepository::insert`].
    fn insert(&self, record: Reviewer) -> Result<Reviewer, RepositoryError>;
    fn update(&self, record: Reviewer) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<Reviewer>, RepositoryError>;
    fn list(&self) -> Result<Vec<Reviewer>, RepositoryError>;
}
