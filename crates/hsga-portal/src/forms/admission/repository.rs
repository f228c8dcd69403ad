use super::domain::AdmissionRecord;
use crate::repository::RepositoryError;

/// Storage abstraction for admission forms so the service can be exercised in isolation.
pub trait AdmissionRepository: Send + Sync {
    fn insert(&self, record: AdmissionRecord) -> Result<AdmissionRecord, RepositoryError>;
    fn list(&self) -> Result<Vec<AdmissionRecord>, RepositoryError>;
}
