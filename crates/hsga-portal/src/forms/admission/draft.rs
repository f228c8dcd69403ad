use chrono::NaiveDate;
use mime::Mime;
use serde::Deserialize;

use super::domain::{AttachmentSlot, FormSubmission};
use super::validation::{validate, ValidationError};
use crate::forms::attachment::{EncodedImage, FileConstraintError};
use crate::forms::patterns;
use crate::forms::pipeline::FormDraft;
use crate::forms::InputRejected;

/// Free-text fields on the admission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionField {
    District,
    InstitutionName,
    StudentName,
    GuardianName,
    ClassName,
    IdentityNumber,
    PhoneNumber,
    Address,
}

impl AdmissionField {
    const fn label(self) -> &'static str {
        match self {
            AdmissionField::District => "District",
            AdmissionField::InstitutionName => "Name of School/College",
            AdmissionField::StudentName => "Name of Student",
            AdmissionField::GuardianName => "Father Name",
            AdmissionField::ClassName => "Class",
            AdmissionField::IdentityNumber => "Student Aadhar No.",
            AdmissionField::PhoneNumber => "Phone No.",
            AdmissionField::Address => "Address",
        }
    }

    const fn numeric_only(self) -> bool {
        matches!(
            self,
            AdmissionField::IdentityNumber | AdmissionField::PhoneNumber
        )
    }
}

/// Who is giving a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declarant {
    Student,
    Authority,
}

/// Admission form while it is being filled in.
///
/// Text fields can also be loaded from JSON (camelCase names); attachments are only set
/// through [`AdmissionDraft::attach`] so the size limit always applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdmissionDraft {
    pub district: String,
    pub institution_name: String,
    pub student_name: String,
    pub guardian_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub class_name: String,
    pub identity_number: String,
    pub phone_number: String,
    pub address: String,
    #[serde(skip)]
    student_signature_image: EncodedImage,
    #[serde(skip)]
    authority_signature_image: EncodedImage,
    #[serde(skip)]
    seal_image: EncodedImage,
    pub student_consent: bool,
    pub authority_consent: bool,
}

impl AdmissionDraft {
    /// Apply a keystroke-level change. Numeric-only fields refuse anything but digits and keep
    /// their previous value.
    pub fn set_field(&mut self, field: AdmissionField, value: &str) -> Result<(), InputRejected> {
        if field.numeric_only() && !patterns::is_digits(value) {
            return Err(InputRejected::NonDigit {
                field: field.label(),
            });
        }

        let target = match field {
            AdmissionField::District => &mut self.district,
            AdmissionField::InstitutionName => &mut self.institution_name,
            AdmissionField::StudentName => &mut self.student_name,
            AdmissionField::GuardianName => &mut self.guardian_name,
            AdmissionField::ClassName => &mut self.class_name,
            AdmissionField::IdentityNumber => &mut self.identity_number,
            AdmissionField::PhoneNumber => &mut self.phone_number,
            AdmissionField::Address => &mut self.address,
        };
        value.clone_into(target);
        Ok(())
    }

    /// Set the date of birth from a `YYYY-MM-DD` date input; an empty value clears it.
    pub fn set_date_of_birth(&mut self, value: &str) -> Result<(), InputRejected> {
        let value = value.trim();
        if value.is_empty() {
            self.date_of_birth = None;
            return Ok(());
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            InputRejected::InvalidDate {
                field: "Date of Birth",
            }
        })?;
        self.date_of_birth = Some(date);
        Ok(())
    }

    pub fn set_consent(&mut self, declarant: Declarant, agreed: bool) {
        match declarant {
            Declarant::Student => self.student_consent = agreed,
            Declarant::Authority => self.authority_consent = agreed,
        }
    }

    /// Encode and attach an image. An oversized or non-image file is refused and the slot
    /// keeps whatever it held before.
    pub fn attach(
        &mut self,
        slot: AttachmentSlot,
        mime: &Mime,
        bytes: &[u8],
    ) -> Result<(), FileConstraintError> {
        let encoded = EncodedImage::encode(mime, bytes)?;
        *self.slot_mut(slot) = encoded;
        Ok(())
    }

    pub fn attachment(&self, slot: AttachmentSlot) -> &EncodedImage {
        match slot {
            AttachmentSlot::StudentSignature => &self.student_signature_image,
            AttachmentSlot::AuthoritySignature => &self.authority_signature_image,
            AttachmentSlot::Seal => &self.seal_image,
        }
    }

    fn slot_mut(&mut self, slot: AttachmentSlot) -> &mut EncodedImage {
        match slot {
            AttachmentSlot::StudentSignature => &mut self.student_signature_image,
            AttachmentSlot::AuthoritySignature => &mut self.authority_signature_image,
            AttachmentSlot::Seal => &mut self.seal_image,
        }
    }
}

impl FormDraft for AdmissionDraft {
    type Payload = FormSubmission;
    type Error = ValidationError;

    fn prepare(&self) -> Result<FormSubmission, ValidationError> {
        let date_of_birth = self
            .date_of_birth
            .ok_or(ValidationError::MissingDateOfBirth)?;

        let candidate = FormSubmission {
            district: self.district.clone(),
            institution_name: self.institution_name.clone(),
            student_name: self.student_name.clone(),
            guardian_name: self.guardian_name.clone(),
            date_of_birth,
            class_name: self.class_name.clone(),
            identity_number: self.identity_number.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            student_signature_image: self.student_signature_image.clone(),
            authority_signature_image: self.authority_signature_image.clone(),
            seal_image: self.seal_image.clone(),
            student_consent: self.student_consent,
            authority_consent: self.authority_consent,
        };

        validate(&candidate)?;
        Ok(candidate)
    }
}
