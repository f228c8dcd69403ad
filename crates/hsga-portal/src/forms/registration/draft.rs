use super::domain::{InstitutionRegistration, TrainerRegistration};
use super::validation::{validate_institution, validate_trainer, RegistrationValidationError};
use crate::forms::patterns;
use crate::forms::pipeline::FormDraft;
use crate::forms::InputRejected;

impl TrainerRegistration {
    /// Phone keystrokes are digits only; anything else keeps the previous value.
    pub fn set_phone(&mut self, value: &str) -> Result<(), InputRejected> {
        if !patterns::is_digits(value) {
            return Err(InputRejected::NonDigit { field: "Phone No." });
        }
        value.clone_into(&mut self.phone);
        Ok(())
    }
}

impl FormDraft for TrainerRegistration {
    type Payload = TrainerRegistration;
    type Error = RegistrationValidationError;

    fn prepare(&self) -> Result<TrainerRegistration, RegistrationValidationError> {
        validate_trainer(self)?;
        Ok(self.clone())
    }
}

impl FormDraft for InstitutionRegistration {
    type Payload = InstitutionRegistration;
    type Error = RegistrationValidationError;

    fn prepare(&self) -> Result<InstitutionRegistration, RegistrationValidationError> {
        validate_institution(self)?;
        Ok(self.clone())
    }
}
