use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::forms::registration::domain::{
    InstitutionRegistration, InstitutionType, TrainerRegistration,
};
use crate::forms::registration::service::RegistrationService;
use crate::memory::{InMemoryInstitutionRepository, InMemoryReviewerRepository};

pub(super) type Service =
    RegistrationService<InMemoryInstitutionRepository, InMemoryReviewerRepository>;

pub(super) fn institution() -> InstitutionRegistration {
    InstitutionRegistration {
        name: "Zilla Parishad High School".to_string(),
        kind: Some(InstitutionType::School),
        contact_name: "M. Lakshmi".to_string(),
        phone: "9876543210".to_string(),
        email: "zphs.warangal@example.org".to_string(),
        district: "Warangal".to_string(),
        password: "camp-fire-2026".to_string(),
    }
}

pub(super) fn trainer() -> TrainerRegistration {
    TrainerRegistration {
        full_name: "Ravi Kumar".to_string(),
        phone: "8123456789".to_string(),
        email: "ravi.kumar@example.org".to_string(),
        district: "Karimnagar".to_string(),
        password: "knots-and-lashings".to_string(),
    }
}

pub(super) fn build_service() -> (
    Service,
    Arc<InMemoryInstitutionRepository>,
    Arc<InMemoryReviewerRepository>,
) {
    let institutions = Arc::new(InMemoryInstitutionRepository::default());
    let reviewers = Arc::new(InMemoryReviewerRepository::default());
    let service = RegistrationService::new(institutions.clone(), reviewers.clone());
    (service, institutions, reviewers)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
