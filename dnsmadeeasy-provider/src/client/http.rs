//! DNS Made Easy HTTP request helpers
//!
//! Every request is resolved against the configured base URL and signed when
//! it is built. Success bodies are decoded per endpoint shape; non-success
//! statuses become [`DmeError::Api`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::{ResponseShape, decode, decode_optional};
use crate::error::{DmeError, Result};
use crate::http_client::{HttpUtils, is_success};

use super::error::map_error_response;
use super::{DnsMadeEasyClient, HEADER_API_KEY, HEADER_HMAC, HEADER_REQUEST_DATE};

/// A signed request ready to be sent.
pub(crate) struct PreparedRequest {
    builder: RequestBuilder,
    method: Method,
    url: Url,
}

impl PreparedRequest {
    /// Attach a JSON body.
    pub(crate) fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let payload = serde_json::to_string(body).map_err(|e| DmeError::Serialization {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {payload}");
        self.builder = self
            .builder
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        Ok(self)
    }
}

impl DnsMadeEasyClient {
    /// Build a signed request for `path` (relative to the base URL).
    pub(crate) fn new_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<PreparedRequest> {
        let mut url = self.config.endpoint_url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let signature = self.sign_now();
        let builder = self
            .client
            .request(method.clone(), url.clone())
            .header(HEADER_API_KEY, self.config.credentials().api_key())
            .header(HEADER_REQUEST_DATE, &signature.timestamp)
            .header(HEADER_HMAC, &signature.hmac)
            .header(ACCEPT, "application/json");

        Ok(PreparedRequest {
            builder,
            method,
            url,
        })
    }

    /// Send a request and return the success body; non-2xx becomes an API error.
    pub(crate) async fn execute(&self, request: PreparedRequest) -> Result<String> {
        let (status, response_text) = HttpUtils::execute_request(
            request.builder,
            request.method.as_str(),
            request.url.as_str(),
        )
        .await?;

        if !is_success(status) {
            return Err(map_error_response(status, &response_text));
        }
        Ok(response_text)
    }

    // ==================== Convenience methods ====================

    /// GET and decode.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        shape: ResponseShape,
    ) -> Result<T> {
        let request = self.new_request(Method::GET, path, query)?;
        let text = self.execute(request).await?;
        decode(&text, shape)
    }

    /// POST a JSON body and decode the bare resource echoed back.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::POST, path, &[])?.json_body(body)?;
        let text = self.execute(request).await?;
        decode_optional(&text, ResponseShape::Bare)?
            .ok_or_else(|| DmeError::parse(format!("empty response body from POST {path}")))
    }

    /// PUT a JSON body. The API answers with an empty body on success.
    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let request = self.new_request(Method::PUT, path, &[])?.json_body(body)?;
        self.execute(request).await.map(|_| ())
    }

    /// DELETE, optionally with query parameters.
    pub(crate) async fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        let request = self.new_request(Method::DELETE, path, query)?;
        self.execute(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ApiEndpoint, ClientConfig};

    use super::*;

    fn client() -> DnsMadeEasyClient {
        let config = ClientConfig::builder("api-key", "secret")
            .endpoint(ApiEndpoint::Custom("http://127.0.0.1:9/V2.0/".into()))
            .build()
            .unwrap();
        DnsMadeEasyClient::new(config).unwrap()
    }

    #[test]
    fn request_attaches_auth_headers() {
        let prepared = client()
            .new_request(Method::GET, "dns/managed/", &[])
            .unwrap();
        let request = prepared.builder.build().unwrap();

        assert_eq!(request.url().as_str(), "http://127.0.0.1:9/V2.0/dns/managed/");
        let headers = request.headers();
        assert_eq!(headers.get("x-dnsme-apikey").unwrap(), "api-key");
        let date = headers.get("x-dnsme-requestdate").unwrap().to_str().unwrap();
        assert!(date.ends_with(" GMT"), "unexpected date header: {date}");
        let signed_at = chrono::DateTime::parse_from_rfc2822(date).unwrap().to_utc();
        let hmac = headers.get("x-dnsme-hmac").unwrap().to_str().unwrap();
        assert_eq!(hmac, crate::client::sign("secret", signed_at).hmac);
    }

    #[test]
    fn repeated_query_parameters_are_kept() {
        let query = vec![("ids", "1".to_string()), ("ids", "2".to_string())];
        let prepared = client()
            .new_request(Method::DELETE, "dns/managed/5/records", &query)
            .unwrap();
        assert_eq!(prepared.url.query(), Some("ids=1&ids=2"));
    }

    #[test]
    fn json_body_sets_content_type() {
        let prepared = client()
            .new_request(Method::POST, "dns/soa", &[])
            .unwrap()
            .json_body(&serde_json::json!({"name": "soa"}))
            .unwrap();
        let request = prepared.builder.build().unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, br#"{"name":"soa"}"#);
    }
}
