use super::domain::FormSubmission;
use crate::forms::patterns;

/// Minimum accepted address length, in characters.
pub const MIN_ADDRESS_CHARS: usize = 10;

/// First rule an admission form fails. Messages are shown to the applicant verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("District Name should contain only letters.")]
    District,
    #[error("School Name should contain only letters/dots.")]
    InstitutionName,
    #[error("Student Name should contain only letters.")]
    StudentName,
    #[error("Father Name should contain only letters.")]
    GuardianName,
    #[error("Class Name contains invalid characters.")]
    ClassName,
    #[error("Aadhar Number must be exactly 12 digits.")]
    IdentityNumber,
    #[error("Phone Number must be a valid 10-digit Indian number.")]
    PhoneNumber,
    #[error("Address is too short.")]
    Address,
    #[error("Student must agree to the declaration.")]
    StudentConsent,
    #[error("Principal/Coordinator must agree to the declaration.")]
    AuthorityConsent,
    #[error("Date of Birth is required.")]
    MissingDateOfBirth,
}

impl ValidationError {
    /// Wire name of the offending field.
    pub const fn field(self) -> &'static str {
        match self {
            ValidationError::District => "district",
            ValidationError::InstitutionName => "institutionName",
            ValidationError::StudentName => "studentName",
            ValidationError::GuardianName => "guardianName",
            ValidationError::ClassName => "className",
            ValidationError::IdentityNumber => "identityNumber",
            ValidationError::PhoneNumber => "phoneNumber",
            ValidationError::Address => "address",
            ValidationError::StudentConsent => "studentConsent",
            ValidationError::AuthorityConsent => "authorityConsent",
            ValidationError::MissingDateOfBirth => "dateOfBirth",
        }
    }
}

/// Check a candidate against the admission rules in their fixed order; the first failure wins.
pub fn validate(candidate: &FormSubmission) -> Result<(), ValidationError> {
    let names = [
        (&candidate.district, ValidationError::District),
        (&candidate.institution_name, ValidationError::InstitutionName),
        (&candidate.student_name, ValidationError::StudentName),
        (&candidate.guardian_name, ValidationError::GuardianName),
    ];
    for (value, error) in names {
        if !patterns::is_name(value) {
            return Err(error);
        }
    }

    if !patterns::is_class_name(&candidate.class_name) {
        return Err(ValidationError::ClassName);
    }
    if !patterns::is_identity_number(&candidate.identity_number) {
        return Err(ValidationError::IdentityNumber);
    }
    if !patterns::is_phone(&candidate.phone_number) {
        return Err(ValidationError::PhoneNumber);
    }
    if candidate.address.chars().count() < MIN_ADDRESS_CHARS {
        return Err(ValidationError::Address);
    }

    if !candidate.student_consent {
        return Err(ValidationError::StudentConsent);
    }
    if !candidate.authority_consent {
        return Err(ValidationError::AuthorityConsent);
    }

    Ok(())
}
