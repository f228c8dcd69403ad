use super::domain::{InstitutionRegistration, TrainerRegistration};
use crate::forms::patterns;

/// First rule a registration form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error("Full Name should contain only letters.")]
    FullName,
    #[error("Phone Number must be a valid 10-digit Indian number.")]
    Phone,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("District should contain only letters.")]
    District,
    #[error("Please select an institution category.")]
    InstitutionType,
    #[error("{0} is required.")]
    Required(&'static str),
}

/// Trainer rules: full name, phone, email, district; the first failure wins.
pub fn validate_trainer(form: &TrainerRegistration) -> Result<(), RegistrationValidationError> {
    if !patterns::is_name(&form.full_name) {
        return Err(RegistrationValidationError::FullName);
    }
    if !patterns::is_phone(&form.phone) {
        return Err(RegistrationValidationError::Phone);
    }
    if !patterns::is_email(&form.email) {
        return Err(RegistrationValidationError::Email);
    }
    if !patterns::is_name(&form.district) {
        return Err(RegistrationValidationError::District);
    }
    require(&form.password, "Password")
}

pub fn validate_institution(
    form: &InstitutionRegistration,
) -> Result<(), RegistrationValidationError> {
    require(&form.name, "Institution Name")?;
    if form.kind.is_none() {
        return Err(RegistrationValidationError::InstitutionType);
    }
    require(&form.contact_name, "Head of Institution")?;
    if !patterns::is_phone(&form.phone) {
        return Err(RegistrationValidationError::Phone);
    }
    if !patterns::is_email(&form.email) {
        return Err(RegistrationValidationError::Email);
    }
    require(&form.district, "District")?;
    require(&form.password, "Password")
}

fn require(value: &str, field: &'static str) -> Result<(), RegistrationValidationError> {
    if value.trim().is_empty() {
        return Err(RegistrationValidationError::Required(field));
    }
    Ok(())
}
