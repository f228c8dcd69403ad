use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::attachment::EncodedImage;
use crate::forms::pipeline::{FormKind, FormPayload};

/// Identifier wrapper for stored admission forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdmissionId(pub String);

/// Student admission form as transmitted to the portal.
///
/// Input also accepts the legacy field names (`schoolName`, `fatherName`, `aadharNo`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub district: String,
    #[serde(alias = "schoolName")]
    pub institution_name: String,
    pub student_name: String,
    #[serde(alias = "fatherName")]
    pub guardian_name: String,
    #[serde(alias = "dob")]
    pub date_of_birth: NaiveDate,
    pub class_name: String,
    #[serde(alias = "aadharNo")]
    pub identity_number: String,
    #[serde(alias = "phoneNo")]
    pub phone_number: String,
    pub address: String,
    #[serde(default, alias = "studentSignature")]
    pub student_signature_image: EncodedImage,
    #[serde(default, alias = "principalSignature")]
    pub authority_signature_image: EncodedImage,
    #[serde(default, alias = "seal")]
    pub seal_image: EncodedImage,
    #[serde(default)]
    pub student_consent: bool,
    #[serde(default)]
    pub authority_consent: bool,
}

impl FormPayload for FormSubmission {
    const KIND: FormKind = FormKind::StudentAdmission;
    const PATH: &'static str = "/forms/student-admission";
}

/// The three image slots on the admission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    StudentSignature,
    AuthoritySignature,
    Seal,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::StudentSignature,
        AttachmentSlot::AuthoritySignature,
        AttachmentSlot::Seal,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AttachmentSlot::StudentSignature => "Student Signature",
            AttachmentSlot::AuthoritySignature => "Principal/Coordinator Signature",
            AttachmentSlot::Seal => "School Seal",
        }
    }
}

impl FormSubmission {
    pub fn attachment(&self, slot: AttachmentSlot) -> &EncodedImage {
        match slot {
            AttachmentSlot::StudentSignature => &self.student_signature_image,
            AttachmentSlot::AuthoritySignature => &self.authority_signature_image,
            AttachmentSlot::Seal => &self.seal_image,
        }
    }
}

/// Stored admission form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRecord {
    pub id: AdmissionId,
    #[serde(flatten)]
    pub submission: FormSubmission,
    pub created_at: DateTime<Utc>,
}
