use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::forms::admission::domain::{AdmissionRecord, AttachmentSlot, FormSubmission};
use crate::forms::admission::draft::{AdmissionDraft, AdmissionField, Declarant};
use crate::forms::admission::repository::AdmissionRepository;
use crate::forms::admission::service::AdmissionService;
use crate::forms::attachment::EncodedImage;
use crate::memory::InMemoryAdmissionRepository;
use crate::repository::RepositoryError;

pub(super) fn signature() -> EncodedImage {
    EncodedImage::encode(&mime::IMAGE_PNG, b"\x89PNG\r\n\x1a\nsignature").expect("encodes")
}

pub(super) fn submission() -> FormSubmission {
    FormSubmission {
        district: "Hyderabad".to_string(),
        institution_name: "St. Josephs High School".to_string(),
        student_name: "Anjali Reddy".to_string(),
        guardian_name: "K. Srinivas Reddy".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2011, 6, 14).expect("valid date"),
        class_name: "8-B".to_string(),
        identity_number: "123412341234".to_string(),
        phone_number: "9123456789".to_string(),
        address: "12-3-45, Ameerpet, Hyderabad".to_string(),
        student_signature_image: signature(),
        authority_signature_image: signature(),
        seal_image: signature(),
        student_consent: true,
        authority_consent: true,
    }
}

pub(super) fn filled_draft() -> AdmissionDraft {
    let mut draft = AdmissionDraft::default();
    let fields = [
        (AdmissionField::District, "Hyderabad"),
        (AdmissionField::InstitutionName, "St. Josephs High School"),
        (AdmissionField::StudentName, "Anjali Reddy"),
        (AdmissionField::GuardianName, "K. Srinivas Reddy"),
        (AdmissionField::ClassName, "8-B"),
        (AdmissionField::IdentityNumber, "123412341234"),
        (AdmissionField::PhoneNumber, "9123456789"),
        (AdmissionField::Address, "12-3-45, Ameerpet, Hyderabad"),
    ];
    for (field, value) in fields {
        draft.set_field(field, value).expect("field accepted");
    }
    draft.set_date_of_birth("2011-06-14").expect("date accepted");
    draft.set_consent(Declarant::Student, true);
    draft.set_consent(Declarant::Authority, true);
    for slot in AttachmentSlot::ALL {
        draft
            .attach(slot, &mime::IMAGE_PNG, b"\x89PNG\r\n\x1a\nsignature")
            .expect("attachment accepted");
    }
    draft
}

pub(super) fn build_service() -> (
    AdmissionService<InMemoryAdmissionRepository>,
    Arc<InMemoryAdmissionRepository>,
) {
    let repository = Arc::new(InMemoryAdmissionRepository::default());
    let service = AdmissionService::new(repository.clone());
    (service, repository)
}

pub(super) struct UnavailableRepository;

impl AdmissionRepository for UnavailableRepository {
    fn insert(&self, _record: AdmissionRecord) -> Result<AdmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<AdmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
