//! DNS Made Easy REST client

mod error;
mod http;
mod provider;
mod sign;
mod types;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{DmeError, Result};

pub use sign::{RequestSignature, sign};

/// Header carrying the API key.
pub(crate) const HEADER_API_KEY: &str = "x-dnsme-apiKey";
/// Header carrying the signed request date.
pub(crate) const HEADER_REQUEST_DATE: &str = "x-dnsme-requestDate";
/// Header carrying the hex HMAC of the request date.
pub(crate) const HEADER_HMAC: &str = "x-dnsme-hmac";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// DNS Made Easy API client.
///
/// Cheap to clone; clones share the connection pool and the read-only
/// configuration, so one client can serve many concurrent tasks.
#[derive(Debug, Clone)]
pub struct DnsMadeEasyClient {
    pub(crate) client: Client,
    pub(crate) config: Arc<ClientConfig>,
}

impl DnsMadeEasyClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.tls_validation_disabled() {
            log::warn!(
                "TLS certificate validation is disabled for {}",
                config.base_url()
            );
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(config.tls_validation_disabled())
            .build()
            .map_err(|e| DmeError::config("http_client", e.to_string()))?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Build a client from the `DME_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
