//! HTTP transport for the submission pipeline: posts a payload to its form route on a
//! running portal and reads back the receipt or the `{error}` message.

use clap::Args;
use hsga_portal::error::AppError;
use hsga_portal::forms::admission::{AdmissionDraft, AttachmentSlot};
use hsga_portal::forms::{
    FormPayload, PipelineState, SubmissionPipeline, SubmissionReceipt, SubmissionTransport,
    TransportError,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpTransport {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for<P: FormPayload>(&self) -> String {
        format!("{}{}", self.base_url, P::PATH)
    }
}

impl<P: FormPayload> SubmissionTransport<P> for HttpTransport {
    async fn transmit(&self, payload: &P) -> Result<SubmissionReceipt, TransportError> {
        let url = self.url_for::<P>();
        debug!(%url, form = P::KIND.label(), "posting form");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<SubmissionReceipt>()
                .await
                .map_err(|err| TransportError::Network(err.to_string()));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| P::KIND.fallback_error().to_string());
        Err(TransportError::Endpoint {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Args, Debug)]
pub(crate) struct AdmissionSubmitArgs {
    /// Base URL of a running portal
    #[arg(long)]
    pub(crate) server: String,
    /// JSON file with the text fields, consents and date of birth (camelCase names)
    #[arg(long)]
    pub(crate) form: PathBuf,
    /// Student signature image
    #[arg(long)]
    pub(crate) student_signature: PathBuf,
    /// Principal/coordinator signature image
    #[arg(long)]
    pub(crate) authority_signature: PathBuf,
    /// School seal image
    #[arg(long)]
    pub(crate) seal: PathBuf,
}

pub(crate) async fn run_admission_submit(args: AdmissionSubmitArgs) -> Result<(), AppError> {
    let raw = std::fs::read(&args.form)?;
    let mut draft: AdmissionDraft = serde_json::from_slice(&raw)?;

    for (slot, path) in [
        (AttachmentSlot::StudentSignature, &args.student_signature),
        (AttachmentSlot::AuthoritySignature, &args.authority_signature),
        (AttachmentSlot::Seal, &args.seal),
    ] {
        attach_file(&mut draft, slot, path)?;
    }

    let transport = HttpTransport::new(&args.server);
    let mut pipeline = SubmissionPipeline::new(draft);
    let state = pipeline
        .submit(&transport)
        .await
        .map_err(|err| AppError::Submission(err.to_string()))?;

    match state {
        PipelineState::Accepted(receipt) => {
            println!("{}", receipt.confirmation());
            if let Some(id) = &receipt.id {
                println!("Reference: {id}");
            }
            Ok(())
        }
        other => Err(AppError::Submission(
            other
                .error_message()
                .unwrap_or_else(|| "Submission failed".to_string()),
        )),
    }
}

fn attach_file(
    draft: &mut AdmissionDraft,
    slot: AttachmentSlot,
    path: &Path,
) -> Result<(), AppError> {
    let bytes = std::fs::read(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    draft.attach(slot, &mime, &bytes)?;
    Ok(())
}
