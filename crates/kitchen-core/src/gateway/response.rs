//! Response normalization
//!
//! Every transport response becomes exactly one of: decoded JSON, the raw
//! response, or an API-class error.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Response as received from the transport, body fully buffered
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text; invalid UTF-8 sequences are replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON regardless of the content type
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| Error::Decode {
            status: self.status,
            message: e.to_string(),
        })
    }
}

/// Successful gateway result
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// Body decoded from a JSON response
    Json(Value),
    /// Any other content type, left for the caller to decode
    Raw(RawResponse),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Raw(_) => None,
        }
    }

    /// JSON payload; a raw response with an empty body becomes `null`
    pub fn into_json(self) -> Result<Value> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Raw(raw) if raw.body.iter().all(u8::is_ascii_whitespace) => {
                Ok(Value::Null)
            }
            ApiResponse::Raw(raw) => raw.json(),
        }
    }

    /// Decode the payload into a typed value
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ApiResponse::Json(value) => Ok(serde_json::from_value(value)?),
            ApiResponse::Raw(raw) => raw.json(),
        }
    }
}

/// Message used when a failure body carries none
pub fn status_message(status: u16) -> String {
    format!("HTTP error! status: {}", status)
}

/// Extract the server's `message` from a failure body, if it has one
fn error_message(raw: &RawResponse) -> Option<String> {
    let body: Value = serde_json::from_slice(&raw.body).ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Turn a transport response into the gateway result
pub fn normalize(raw: RawResponse) -> Result<ApiResponse> {
    if !raw.is_success() {
        let message = error_message(&raw).unwrap_or_else(|| status_message(raw.status));
        return Err(Error::api(message, raw.status));
    }

    if raw.is_json() {
        return raw.json().map(ApiResponse::Json);
    }

    Ok(ApiResponse::Raw(raw))
}
