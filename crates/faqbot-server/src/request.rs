//! Request resolution — turns a raw chat body into a [`ChatRequest`].
//!
//! The wire format is loose (`{ "message"?: string, "faqId"?: string }`), so
//! it is resolved once here. Everything past this point works with a single
//! non-optional string.

use serde_json::Value;
use thiserror::Error;

/// A resolved chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRequest {
    /// Direct lookup of a knowledge-base entry (a clicked suggestion).
    ById(String),
    /// Free text to run through the matching engine.
    ByMessage(String),
}

/// Why a body could not be resolved. The display text is sent back to the
/// client as the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Please provide either a message or an faqId.")]
    MissingInput,
    #[error("Invalid request format. Please provide a valid JSON body.")]
    MalformedJson,
    #[error("Request body is too large.")]
    TooLarge,
}

impl ChatRequest {
    /// Resolve a raw request body as received on the wire. Bytes that are
    /// not UTF-8 cannot be JSON.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, RequestError> {
        let text = std::str::from_utf8(raw).map_err(|_| RequestError::MalformedJson)?;
        Self::from_body(text)
    }

    /// Resolve a raw request body.
    ///
    /// A non-empty string `faqId` wins over `message`. A `message` must be a
    /// non-empty string; whitespace-only text still counts and reaches the
    /// engine. Fields of any other type are treated as absent.
    pub fn from_body(raw: &str) -> Result<Self, RequestError> {
        if raw.trim().is_empty() {
            return Err(RequestError::MissingInput);
        }

        let value: Value = serde_json::from_str(raw).map_err(|_| RequestError::MalformedJson)?;
        let Value::Object(body) = value else {
            return Err(RequestError::MissingInput);
        };

        if let Some(Value::String(id)) = body.get("faqId") {
            if !id.is_empty() {
                return Ok(Self::ById(id.clone()));
            }
        }

        match body.get("message") {
            Some(Value::String(message)) if !message.is_empty() => {
                Ok(Self::ByMessage(message.clone()))
            }
            _ => Err(RequestError::MissingInput),
        }
    }
}
