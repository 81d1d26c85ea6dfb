use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all DNS Made Easy client operations.
///
/// Every variant is serializable for structured error reporting. Use
/// [`kind()`](Self::kind) to tell configuration, transport, API, decode and
/// deletion-timeout failures apart without matching on every variant.
///
/// # Retry policy
///
/// The client never retries on its own, with one exception: a domain delete
/// rejected because another operation on the domain is still pending is
/// polled by [`DeleteRetry`](crate::DeleteRetry) until it succeeds or the
/// caller's deadline passes.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DmeError {
    /// The client configuration is missing or malformed. Raised before any network call.
    #[error("Invalid configuration '{field}': {detail}")]
    Config {
        /// Configuration field at fault.
        field: String,
        /// What's wrong with it.
        detail: String,
    },

    /// A request argument is invalid (e.g. updating a resource without an identifier).
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, TLS failure, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-success HTTP status.
    #[error("API error (HTTP {status}): {}", .messages.join("; "))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error strings reported by the API, in order.
        messages: Vec<String>,
    },

    /// The requested DNS record does not exist in the domain.
    #[error("Record '{record_id}' not found in domain '{domain_id}'")]
    RecordNotFound {
        /// Domain that was searched.
        domain_id: u64,
        /// Record that was not found.
        record_id: u64,
    },

    /// The response body did not match the expected shape.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The API returned a record type this client does not model.
    #[error("Unsupported record type: {record_type}")]
    UnsupportedRecordType {
        /// The unsupported record type string.
        record_type: String,
    },

    /// Domain deletion kept reporting a pending operation until the deadline passed.
    #[error("Could not delete domain '{domain_id}' after {elapsed_secs}s: {last_message}")]
    DeleteTimedOut {
        /// Domain that could not be deleted.
        domain_id: u64,
        /// Seconds spent polling before giving up.
        elapsed_secs: u64,
        /// The last error message reported by the API.
        last_message: String,
    },

    /// Domain deletion was cancelled by the caller between attempts.
    #[error("Deletion of domain '{domain_id}' was cancelled")]
    Cancelled {
        /// Domain whose deletion was abandoned.
        domain_id: u64,
    },
}

/// Coarse classification of [`DmeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Bad configuration or arguments; nothing was sent.
    Config,
    /// The request never produced an HTTP response.
    Transport,
    /// The API rejected the request.
    Api,
    /// The response could not be decoded (protocol mismatch).
    Decode,
    /// The delete-retry deadline passed.
    DeleteTimeout,
    /// The caller cancelled a delete-retry loop.
    Cancelled,
}

impl DmeError {
    /// Returns the coarse [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config { .. } | Self::InvalidParameter { .. } => ErrorKind::Config,
            Self::Network { .. } | Self::Timeout { .. } => ErrorKind::Transport,
            Self::Api { .. } | Self::RecordNotFound { .. } => ErrorKind::Api,
            Self::Parse { .. } | Self::Serialization { .. } | Self::UnsupportedRecordType { .. } => {
                ErrorKind::Decode
            }
            Self::DeleteTimedOut { .. } => ErrorKind::DeleteTimeout,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }

    /// The vendor error text of an [`Api`](Self::Api) error, joined the same way `Display` does.
    pub fn api_message(&self) -> Option<String> {
        match self {
            Self::Api { messages, .. } => Some(messages.join("; ")),
            _ => None,
        }
    }

    pub(crate) fn config(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn parse(detail: impl ToString) -> Self {
        Self::Parse {
            detail: detail.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, DmeError>`.
pub type Result<T> = std::result::Result<T, DmeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config_error() {
        let e = DmeError::config("api_key", "must not be empty");
        assert_eq!(
            e.to_string(),
            "Invalid configuration 'api_key': must not be empty"
        );
    }

    #[test]
    fn display_api_error_joins_messages() {
        let e = DmeError::Api {
            status: 400,
            messages: vec!["Record name is invalid.".into(), "TTL is too low.".into()],
        };
        assert_eq!(
            e.to_string(),
            "API error (HTTP 400): Record name is invalid.; TTL is too low."
        );
    }

    #[test]
    fn display_delete_timed_out() {
        let e = DmeError::DeleteTimedOut {
            domain_id: 42,
            elapsed_secs: 120,
            last_message: "pending".into(),
        };
        assert_eq!(
            e.to_string(),
            "Could not delete domain '42' after 120s: pending"
        );
    }

    #[test]
    fn display_record_not_found() {
        let e = DmeError::RecordNotFound {
            domain_id: 1,
            record_id: 7,
        };
        assert_eq!(e.to_string(), "Record '7' not found in domain '1'");
    }

    #[test]
    fn api_message_only_for_api_errors() {
        let api = DmeError::Api {
            status: 404,
            messages: vec!["Not found".into()],
        };
        assert_eq!(api.api_message().as_deref(), Some("Not found"));
        assert_eq!(DmeError::parse("bad").api_message(), None);
    }

    #[test]
    fn kinds_are_distinguishable() {
        assert_eq!(DmeError::config("a", "b").kind(), ErrorKind::Config);
        assert_eq!(
            DmeError::Network {
                detail: "refused".into()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            DmeError::Timeout {
                detail: "30s".into()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            DmeError::Api {
                status: 500,
                messages: vec![]
            }
            .kind(),
            ErrorKind::Api
        );
        assert_eq!(DmeError::parse("x").kind(), ErrorKind::Decode);
        assert_eq!(
            DmeError::UnsupportedRecordType {
                record_type: "LOC".into()
            }
            .kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            DmeError::Cancelled { domain_id: 1 }.kind(),
            ErrorKind::Cancelled
        );
    }

    #[test]
    fn serialize_tags_variant_code() {
        let e = DmeError::Api {
            status: 400,
            messages: vec!["bad".into()],
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Api\""));
        assert!(json.contains("\"status\":400"));
    }

    #[test]
    fn deserialize_round_trip_keeps_display() {
        let original = DmeError::Network {
            detail: "connection refused".into(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: DmeError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
