use thiserror::Error;

/// Reasons a stored token could not be read.
///
/// The splash flow never shows these to the user; a malformed token simply
/// routes to login.
#[derive(Error, Debug)]
pub enum MalformedTokenError {
    #[error("Expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("Payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload is not a JSON object")]
    NotAnObject,
}
