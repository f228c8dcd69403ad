use std::sync::Arc;

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::forms::registration::{
    Institution, InstitutionRepository, InstitutionType, RecordId, RegistrationStatus, Reviewer,
    ReviewerRepository, UniqueId,
};
use crate::memory::{InMemoryInstitutionRepository, InMemoryReviewerRepository};
use crate::review::workflow::ReviewService;

pub(super) type Service = ReviewService<InMemoryInstitutionRepository, InMemoryReviewerRepository>;

pub(super) fn institution(seq: u32, status: RegistrationStatus) -> Institution {
    Institution {
        id: RecordId(format!("inst-{seq:06}")),
        unique_id: UniqueId(format!("HSGA-INST-{seq:04}")),
        name: format!("Model School {seq}"),
        kind: InstitutionType::School,
        contact_name: "A. Prasad".to_string(),
        phone: "9000000001".to_string(),
        email: format!("school{seq}@example.org"),
        district: "Khammam".to_string(),
        status,
        assigned_reviewer_id: None,
        credential_hash: String::new(),
        registered_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
    }
}

pub(super) fn reviewer(seq: u32, status: RegistrationStatus) -> Reviewer {
    Reviewer {
        id: RecordId(format!("trn-{seq:06}")),
        unique_id: UniqueId(format!("HSGA-TR-{seq:04}")),
        full_name: format!("Trainer {seq}"),
        phone: "9000000002".to_string(),
        email: format!("trainer{seq}@example.org"),
        district: "Khammam".to_string(),
        status,
        credential_hash: String::new(),
        registered_at: Utc.with_ymd_and_hms(2026, 1, 6, 9, 0, 0).unwrap(),
    }
}

/// Seeds `inst-000001` (PENDING), `inst-000002` (APPROVED), `HSGA-TR-0001` (APPROVED) and
/// `HSGA-TR-0002` (PENDING).
pub(super) fn build_service() -> (
    Service,
    Arc<InMemoryInstitutionRepository>,
    Arc<InMemoryReviewerRepository>,
) {
    let institutions = Arc::new(InMemoryInstitutionRepository::default());
    let reviewers = Arc::new(InMemoryReviewerRepository::default());

    institutions
        .insert(institution(1, RegistrationStatus::Pending))
        .expect("seed institution");
    institutions
        .insert(institution(2, RegistrationStatus::Approved))
        .expect("seed institution");
    reviewers
        .insert(reviewer(1, RegistrationStatus::Approved))
        .expect("seed trainer");
    reviewers
        .insert(reviewer(2, RegistrationStatus::Pending))
        .expect("seed trainer");

    let service = ReviewService::new(institutions.clone(), reviewers.clone());
    (service, institutions, reviewers)
}

pub(super) fn record_id(value: &str) -> RecordId {
    RecordId(value.to_string())
}

pub(super) fn unique_id(value: &str) -> UniqueId {
    UniqueId(value.to_string())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
