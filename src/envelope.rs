//! The two-layer response envelope shared by every wallet service endpoint.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Application error code used when a success payload cannot be decoded.
///
/// Outside the service's positive code space, so it never collides with a
/// real application code.
pub const ERR_PAYLOAD_DECODE: i64 = -1;

/// Uniform wrapper around every response body.
///
/// `payload` carries the JSON text of the operation-specific body
/// serialized as a string, so the envelope shape stays identical across
/// endpoints. A non-zero `err_code` signals failure regardless of the
/// HTTP status the envelope arrived with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Application error code; zero on success.
    #[serde(rename = "ErrCode", default)]
    pub err_code: i64,
    /// Human-readable reason when `err_code` is non-zero.
    #[serde(rename = "ErrMessage", default)]
    pub err_message: String,
    /// JSON text of the typed payload; empty or absent on failure.
    #[serde(rename = "Payload", default)]
    pub payload: String,
}

impl Envelope {
    /// Parse raw response body text into an envelope.
    ///
    /// The HTTP status is only consulted when the body is not an envelope
    /// at all: the resulting coded error uses the status as its code and
    /// the raw body (or the status reason when the body is empty) as its
    /// message.
    pub fn from_body(status: StatusCode, body: &str) -> Result<Self, WalletError> {
        serde_json::from_str(body).map_err(|_| {
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_string()
            } else {
                body.to_string()
            };
            WalletError::coded(i64::from(status.as_u16()), message)
        })
    }

    /// Collapse the envelope into either a typed payload or a coded error.
    ///
    /// A non-zero `err_code` wins unconditionally. On success an empty
    /// `payload` decodes to the payload type's default (void success);
    /// otherwise the payload string is parsed as `T`.
    pub fn into_payload<T>(self) -> Result<T, WalletError>
    where
        T: DeserializeOwned + Default,
    {
        if self.err_code != 0 {
            return Err(WalletError::Coded {
                code: self.err_code,
                message: self.err_message,
            });
        }
        if self.payload.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&self.payload).map_err(|e| {
            WalletError::coded(ERR_PAYLOAD_DECODE, format!("malformed payload: {e}"))
        })
    }
}
