//! Client-side submission pipeline shared by every public form.
//!
//! A pipeline owns one draft and walks it through
//! `Editing -> Validating -> {Submitting -> Accepted | Rejected} | ValidationFailed`.
//! Each explicit [`SubmissionPipeline::submit`] makes at most one transport attempt; nothing
//! is retried automatically and a rejected draft keeps every field the user entered.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which public form a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    StudentAdmission,
    InstitutionRegistration,
    TrainerRegistration,
}

impl FormKind {
    pub const fn label(self) -> &'static str {
        match self {
            FormKind::StudentAdmission => "student_admission",
            FormKind::InstitutionRegistration => "institution_registration",
            FormKind::TrainerRegistration => "trainer_registration",
        }
    }

    /// Message shown when the endpoint refuses a payload without explaining why.
    pub const fn fallback_error(self) -> &'static str {
        match self {
            FormKind::StudentAdmission => "Submission failed",
            FormKind::InstitutionRegistration => "Failed to submit registration",
            FormKind::TrainerRegistration => "Registration failed",
        }
    }
}

/// A payload that can be posted to a submission endpoint.
pub trait FormPayload: Serialize + Send + Sync {
    const KIND: FormKind;
    /// Route the payload is posted to.
    const PATH: &'static str;
}

/// Editable form state that can be turned into a transmittable payload.
pub trait FormDraft {
    type Payload: FormPayload;
    type Error: fmt::Display;

    /// Run the form's validation rules, returning the payload only when every rule passes.
    fn prepare(&self) -> Result<Self::Payload, Self::Error>;
}

/// Acknowledgement returned by a submission endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Public identifier issued by registration flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// Storage identifier of the accepted record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SubmissionReceipt {
    pub fn confirmation(&self) -> String {
        match &self.unique_id {
            Some(unique_id) => format!("Registration successful. Your ID is {unique_id}"),
            None => "Your form has been submitted successfully to the administration.".to_string(),
        }
    }
}

/// Failure to get a payload accepted by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The endpoint answered and refused the payload.
    #[error("{message}")]
    Endpoint { status: u16, message: String },
    /// The request never produced an answer.
    #[error("An error occurred. Please try again.")]
    Network(String),
}

/// Outbound seam for submitting payloads (HTTP, or a service called in-process).
pub trait SubmissionTransport<P: FormPayload>: Send + Sync {
    fn transmit(
        &self,
        payload: &P,
    ) -> impl Future<Output = Result<SubmissionReceipt, TransportError>> + Send;
}

/// Observable pipeline states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Editing,
    Validating,
    ValidationFailed(String),
    Submitting,
    Accepted(SubmissionReceipt),
    Rejected(TransportError),
}

impl PipelineState {
    /// States in which fields may change and a new submit may start.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            PipelineState::Editing
                | PipelineState::ValidationFailed(_)
                | PipelineState::Rejected(_)
        )
    }

    /// User-facing error message for the current state, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            PipelineState::ValidationFailed(message) => Some(message.clone()),
            PipelineState::Rejected(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

/// Refusals raised by the pipeline itself, before any validation or transport work.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("form was already accepted")]
    AlreadyAccepted,
}

pub struct SubmissionPipeline<D> {
    draft: D,
    state: PipelineState,
}

impl<D: FormDraft> SubmissionPipeline<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            state: PipelineState::Editing,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutable access to the draft. A displayed error stays visible until the next submit.
    pub fn edit(&mut self) -> Result<&mut D, PipelineError> {
        self.ensure_editable()?;
        Ok(&mut self.draft)
    }

    /// Validate the draft and, when it passes, make exactly one transport attempt.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<&PipelineState, PipelineError>
    where
        T: SubmissionTransport<D::Payload>,
    {
        self.ensure_editable()?;
        let kind = <D::Payload as FormPayload>::KIND;

        self.state = PipelineState::Validating;
        let payload = match self.draft.prepare() {
            Ok(payload) => payload,
            Err(error) => {
                let message = error.to_string();
                debug!(form = kind.label(), %message, "draft failed validation");
                self.state = PipelineState::ValidationFailed(message);
                return Ok(&self.state);
            }
        };

        let attempt = Attempt::begin(&mut self.state);
        let settled = match transport.transmit(&payload).await {
            Ok(receipt) => {
                debug!(form = kind.label(), ?receipt, "submission accepted");
                PipelineState::Accepted(receipt)
            }
            Err(error) => {
                warn!(form = kind.label(), %error, "submission rejected");
                PipelineState::Rejected(error)
            }
        };
        attempt.settle(settled);
        Ok(&self.state)
    }

    /// Start over with an empty draft after an accepted submission ("Submit Another").
    pub fn reset(&mut self)
    where
        D: Default,
    {
        self.draft = D::default();
        self.state = PipelineState::Editing;
    }

    fn ensure_editable(&self) -> Result<(), PipelineError> {
        match self.state {
            PipelineState::Submitting | PipelineState::Validating => Err(PipelineError::InFlight),
            PipelineState::Accepted(_) => Err(PipelineError::AlreadyAccepted),
            _ => Ok(()),
        }
    }
}

/// Holds the pipeline in `Submitting` for one transport attempt. Dropping it unsettled
/// (the submit future was cancelled) puts the pipeline back into `Editing`.
struct Attempt<'a> {
    state: &'a mut PipelineState,
    settled: bool,
}

impl<'a> Attempt<'a> {
    fn begin(state: &'a mut PipelineState) -> Self {
        *state = PipelineState::Submitting;
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, next: PipelineState) {
        *self.state = next;
        self.settled = true;
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state = PipelineState::Editing;
        }
    }
}
