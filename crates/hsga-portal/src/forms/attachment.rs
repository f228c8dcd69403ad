//! Image attachments carried inside form payloads as base64 data URLs.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mime::Mime;
use serde::{Deserialize, Serialize};

/// Largest accepted attachment, in raw bytes.
pub const MAX_ATTACHMENT_BYTES: usize = 1024 * 1024;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Raised when an attachment cannot be attached or accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileConstraintError {
    #[error("File size must be less than 1MB")]
    TooLarge { size: usize, limit: usize },
    #[error("attachment must be an image, found {mime}")]
    NotAnImage { mime: String },
    #[error("attachment is not a base64 encoded image")]
    Malformed,
}

/// Self-describing encoded image (`data:<mime>;base64,<payload>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Encode raw image bytes, refusing anything over [`MAX_ATTACHMENT_BYTES`] or not `image/*`.
    pub fn encode(mime: &Mime, bytes: &[u8]) -> Result<Self, FileConstraintError> {
        check_size(bytes.len())?;
        check_image(mime)?;

        let mut encoded = String::with_capacity(64 + bytes.len() * 4 / 3);
        encoded.push_str(DATA_URL_PREFIX);
        encoded.push_str(mime.essence_str());
        encoded.push_str(BASE64_MARKER);
        STANDARD.encode_string(bytes, &mut encoded);
        Ok(Self(encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parse and decode the data URL, re-applying the size and MIME constraints.
    pub fn decode(&self) -> Result<DecodedImage, FileConstraintError> {
        let rest = self
            .0
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(FileConstraintError::Malformed)?;
        let (media_type, payload) = rest
            .split_once(BASE64_MARKER)
            .ok_or(FileConstraintError::Malformed)?;

        let mime: Mime = media_type
            .parse()
            .map_err(|_| FileConstraintError::Malformed)?;
        check_image(&mime)?;

        // Reject obviously oversized payloads before allocating the decode buffer.
        let estimated = payload.len() / 4 * 3;
        if estimated > MAX_ATTACHMENT_BYTES + 3 {
            return Err(FileConstraintError::TooLarge {
                size: estimated,
                limit: MAX_ATTACHMENT_BYTES,
            });
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| FileConstraintError::Malformed)?;
        check_size(bytes.len())?;

        Ok(DecodedImage { mime, bytes })
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads run to a megabyte; only the header is useful in logs.
        match self.0.split_once(',') {
            Some((header, payload)) => write!(f, "{header},<{} chars>", payload.len()),
            None => write!(f, "<{} chars>", self.0.len()),
        }
    }
}

/// Decoded attachment contents.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub mime: Mime,
    pub bytes: Vec<u8>,
}

fn check_size(size: usize) -> Result<(), FileConstraintError> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err(FileConstraintError::TooLarge {
            size,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    Ok(())
}

fn check_image(mime: &Mime) -> Result<(), FileConstraintError> {
    if mime.type_() != mime::IMAGE {
        return Err(FileConstraintError::NotAnImage {
            mime: mime.essence_str().to_string(),
        });
    }
    Ok(())
}
