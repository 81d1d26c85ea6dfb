//! Generic HTTP helpers
//!
//! Sending a prepared request, logging it, and turning `reqwest` failures into
//! transport errors. Signing and error-payload mapping stay with the client;
//! nothing here retries.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::DmeError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - fully prepared request (URL, headers, body)
    /// * `method_name` - request method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP response, success or not
    /// * `Err(DmeError::Timeout)` when reqwest reports a timeout
    /// * `Err(DmeError::Network)` for every other send or read failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), DmeError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DmeError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                DmeError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| DmeError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(DmeError::Parse)` - malformed JSON or a shape mismatch
    pub fn parse_json<T>(response_text: &str) -> Result<T, DmeError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            DmeError::parse(e)
        })
    }
}

/// Whether an HTTP status code counts as success.
pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(204));
        assert!(!is_success(304));
        assert!(!is_success(400));
        assert!(!is_success(503));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Id {
            id: u64,
        }
        let result: Result<Id, DmeError> = HttpUtils::parse_json(r#"{"id":42}"#);
        assert!(matches!(&result, Ok(Id { id: 42 })), "unexpected: {result:?}");
    }

    #[test]
    fn parse_json_invalid_is_parse_error() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Id {
            id: u64,
        }
        let result: Result<Id, DmeError> = HttpUtils::parse_json("<html>502</html>");
        assert!(matches!(&result, Err(DmeError::Parse { .. })), "unexpected: {result:?}");
    }
}
