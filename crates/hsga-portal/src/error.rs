use crate::calendar::CalendarError;
use crate::config::ConfigError;
use crate::forms::attachment::FileConstraintError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Calendar(CalendarError),
    Attachment(FileConstraintError),
    Payload(serde_json::Error),
    Body(JsonRejection),
    Path(PathRejection),
    /// A form submission that did not reach `Accepted`.
    Submission(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Calendar(err) => write!(f, "{}", err),
            AppError::Attachment(err) => write!(f, "{}", err),
            AppError::Payload(err) => write!(f, "invalid payload: {}", err),
            AppError::Body(err) => write!(f, "invalid request body: {}", err.body_text()),
            AppError::Path(err) => write!(f, "invalid path: {}", err.body_text()),
            AppError::Submission(message) => write!(f, "submission failed: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Calendar(err) => Some(err),
            AppError::Attachment(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Body(err) => Some(err),
            AppError::Path(err) => Some(err),
            AppError::Submission(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Calendar(err) => err.status_code(),
            AppError::Attachment(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Payload(_) | AppError::Path(_) => StatusCode::BAD_REQUEST,
            AppError::Body(JsonRejection::BytesRejection(err)) => err.status(),
            AppError::Body(JsonRejection::MissingJsonContentType(err)) => err.status(),
            AppError::Body(_) => StatusCode::BAD_REQUEST,
            AppError::Submission(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CalendarError> for AppError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}

impl From<FileConstraintError> for AppError {
    fn from(value: FileConstraintError) -> Self {
        Self::Attachment(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::Body(value)
    }
}

impl From<PathRejection> for AppError {
    fn from(value: PathRejection) -> Self {
        Self::Path(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}
