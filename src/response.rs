//! Response normalization.
//!
//! Every completed HTTP exchange — 4xx and 5xx included — is normalized into
//! exactly one [`ApiResponse`] envelope. Normalization never fails: a bad
//! status flips the `success` flag, and a body that does not match its
//! declared content type degrades to raw text.

use serde::Serialize;

use crate::transport::TransportResponse;

/// Normalized result of a completed billing API call.
///
/// Serializes with the wire field names the billing UI expects
/// (`success`, `httpStatus`, `body`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Whether the HTTP status was in the 2xx class.
    pub success: bool,
    /// Numeric HTTP status, present on failures too.
    pub http_status: u16,
    /// Response payload.
    pub body: ResponseBody,
}

/// Payload of an [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Parsed payload of a response that declared a JSON content type.
    Json(serde_json::Value),
    /// Raw text of any other response, lossily decoded.
    Text(String),
}

impl ResponseBody {
    /// Returns the parsed JSON payload, if this body is one.
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text payload, if this body is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl ApiResponse {
    /// Normalizes a completed transport exchange into an envelope.
    ///
    /// `success` reflects the status class, not the mere absence of a
    /// transport error. A body under a JSON content type that fails to parse
    /// falls back to raw text rather than failing the call.
    #[must_use]
    pub fn from_transport(response: TransportResponse) -> Self {
        let success = (200..300).contains(&response.status);
        let body = normalize_body(&response);

        Self {
            success,
            http_status: response.status,
            body,
        }
    }
}

fn normalize_body(response: &TransportResponse) -> ResponseBody {
    if declares_json(response) {
        if let Ok(value) = serde_json::from_slice(&response.body) {
            return ResponseBody::Json(value);
        }
    }

    ResponseBody::Text(String::from_utf8_lossy(&response.body).into_owned())
}

fn declares_json(response: &TransportResponse) -> bool {
    response
        .content_type()
        .is_some_and(|content_type| content_type.contains("json"))
}
