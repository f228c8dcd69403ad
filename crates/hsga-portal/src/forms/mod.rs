//! Public intake forms: student admission plus institution and trainer registration.

pub mod admission;
pub mod attachment;
pub mod patterns;
pub mod pipeline;
pub mod registration;

pub use attachment::{DecodedImage, EncodedImage, FileConstraintError, MAX_ATTACHMENT_BYTES};
pub use pipeline::{
    FormDraft, FormKind, FormPayload, PipelineError, PipelineState, SubmissionPipeline,
    SubmissionReceipt, SubmissionTransport, TransportError,
};

/// Keystroke rejected at the input boundary; the previous value is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputRejected {
    #[error("{field} accepts digits only")]
    NonDigit { field: &'static str },
    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str },
}
