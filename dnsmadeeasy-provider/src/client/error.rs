//! DNS Made Easy error response mapping
//!
//! Non-success responses carry `{"error": ["message", ...]}`. Some gateways
//! answer with a bare array or with plain text/HTML instead; those fall back
//! to the raw body so no message is lost.

use serde::Deserialize;

use crate::error::DmeError;

/// Error payload shapes seen on non-success responses.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Wrapped { error: ErrorMessages },
    Messages(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessages {
    Many(Vec<String>),
    One(String),
}

/// Build the [`DmeError::Api`] for a non-success response.
pub(crate) fn map_error_response(status: u16, body: &str) -> DmeError {
    let messages = match serde_json::from_str::<ErrorBody>(body) {
        Ok(
            ErrorBody::Wrapped {
                error: ErrorMessages::Many(messages),
            }
            | ErrorBody::Messages(messages),
        ) => messages,
        Ok(ErrorBody::Wrapped {
            error: ErrorMessages::One(message),
        }) => vec![message],
        Err(_) if body.trim().is_empty() => vec![format!("HTTP {status}")],
        Err(_) => vec![body.trim().to_string()],
    };

    log::error!("API error: HTTP {status} - {}", messages.join("; "));
    DmeError::Api { status, messages }
}
