//! Response envelope decoding.
//!
//! List endpoints wrap their payload as `{"data": [...]}`; single-object GETs
//! and every POST answer with the bare resource. Each endpoint states which
//! shape it expects through [`ResponseShape`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

/// `{ "data": ... }` wrapper used by list endpoints.
#[derive(Debug, Deserialize)]
pub struct GenericEnvelope<T> {
    pub data: T,
}

/// How an endpoint's success body is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Payload nested under `data`.
    Enveloped,
    /// Payload is the body itself.
    Bare,
}

/// Decode a success body according to `shape`.
pub fn decode<T: DeserializeOwned>(text: &str, shape: ResponseShape) -> Result<T> {
    match shape {
        ResponseShape::Enveloped => {
            HttpUtils::parse_json::<GenericEnvelope<T>>(text).map(|envelope| envelope.data)
        }
        ResponseShape::Bare => HttpUtils::parse_json(text),
    }
}

/// Like [`decode`], but an empty (or whitespace-only) body yields `None`.
pub fn decode_optional<T: DeserializeOwned>(text: &str, shape: ResponseShape) -> Result<Option<T>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    decode(text, shape).map(Some)
}
