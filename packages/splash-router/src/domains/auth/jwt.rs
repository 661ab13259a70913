//! Unverified JWT payload decoding.
//!
//! Reads the claims segment of a compact token so the splash screen can tell
//! whether a stored session is still usable. Nothing here checks the
//! signature: a successful decode is NOT authentication and must never be
//! used for trust decisions.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::MalformedTokenError;

/// Standard alphabet, padding optional. Payload segments are translated from
/// the URL-safe alphabet before decoding, so both alphabets are accepted.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Header written by [`encode_unsigned`].
const UNSIGNED_HEADER: &str = r#"{"alg":"none","typ":"JWT"}"#;

/// Decoded token claims.
///
/// Only `exp` is interpreted. Every other field is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenClaims {
    /// Expiry as epoch seconds, when the payload carries a numeric `exp`.
    pub expires_at: Option<f64>,
    /// The full decoded payload, `exp` included.
    pub fields: Map<String, Value>,
}

impl TokenClaims {
    fn from_fields(fields: Map<String, Value>) -> Self {
        let expires_at = fields.get("exp").and_then(Value::as_f64);
        Self { expires_at, fields }
    }

    /// True when the token carries an expiry strictly before `now`.
    ///
    /// A token without an expiry is not "expired" here; callers decide what
    /// a missing `exp` means.
    pub fn is_expired_at(&self, now_epoch_seconds: i64) -> bool {
        matches!(self.expires_at, Some(exp) if exp < now_epoch_seconds as f64)
    }

    /// Look up an arbitrary claim.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Consume the claims, returning the raw payload mapping.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// Decode the payload segment of a compact `header.payload.signature` token.
pub fn decode(token: &str) -> Result<TokenClaims, MalformedTokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(MalformedTokenError::SegmentCount(segments.len()));
    }

    let standard: String = segments[1]
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE.decode(standard)?;
    let text = String::from_utf8(bytes)?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(fields) => Ok(TokenClaims::from_fields(fields)),
        _ => Err(MalformedTokenError::NotAnObject),
    }
}

/// Build an unsigned token around `payload`.
///
/// The header declares `alg: none` and the signature segment is empty. Meant
/// for fixtures and local tooling; [`decode`] reads it back unchanged.
pub fn encode_unsigned(payload: &Map<String, Value>) -> String {
    let payload = Value::Object(payload.clone()).to_string();
    format!(
        "{}.{}.",
        URL_SAFE_NO_PAD.encode(UNSIGNED_HEADER),
        URL_SAFE_NO_PAD.encode(payload)
    )
}
