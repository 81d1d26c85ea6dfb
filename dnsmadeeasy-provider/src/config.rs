//! Client configuration: credentials, endpoint selection, TLS and clock offset.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use url::Url;

use crate::error::{DmeError, Result};
use crate::utils::log_sanitizer::mask_key;

/// Production API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.dnsmadeeasy.com/V2.0/";
/// Sandbox API base URL.
pub const SANDBOX_API_URL: &str = "https://api.sandbox.dnsmadeeasy.com/V2.0/";

/// Largest clock offset, in seconds, accepted in either direction.
pub const MAX_TIME_OFFSET_SECS: i64 = 86_400;

/// Environment variable names read by [`ClientConfig::from_env`].
pub mod env {
    /// API key (public identifier).
    pub const API_KEY: &str = "DME_API_KEY";
    /// Secret key used for request signing.
    pub const SECRET_KEY: &str = "DME_SECRET_KEY";
    /// `true`/`1`/`yes` selects the sandbox endpoint.
    pub const SANDBOX: &str = "DME_SANDBOX";
    /// Custom base URL; overrides `DME_SANDBOX`.
    pub const API_URL: &str = "DME_API_URL";
    /// `true`/`1`/`yes` disables certificate validation (non-production only).
    pub const INSECURE_TLS: &str = "DME_INSECURE_TLS";
    /// Signed clock offset in seconds added to the signing time.
    pub const TIME_OFFSET: &str = "DME_TIME_OFFSET";
}

/// Which API instance to talk to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiEndpoint {
    /// The production API.
    #[default]
    Production,
    /// The sandbox API used for testing.
    Sandbox,
    /// Any other base URL (self-hosted proxy, mock server).
    Custom(String),
}

impl ApiEndpoint {
    fn base_url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Sandbox => SANDBOX_API_URL,
            Self::Custom(url) => url,
        }
    }
}

/// API key pair. The secret key never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask_key(&self.api_key))
            .field("secret_key", &"****")
            .finish()
    }
}

/// Immutable configuration of one client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    credentials: Credentials,
    disable_tls_validation: bool,
    time_offset: Duration,
}

impl ClientConfig {
    pub fn builder(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder::new(Credentials::new(api_key, secret_key))
    }

    /// Load configuration from the process environment (see [`env`]).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(env::API_KEY).unwrap_or_default();
        let secret_key = lookup(env::SECRET_KEY).unwrap_or_default();

        let endpoint = match lookup(env::API_URL).filter(|url| !url.trim().is_empty()) {
            Some(url) => ApiEndpoint::Custom(url),
            None if lookup(env::SANDBOX).is_some_and(|v| is_truthy(&v)) => ApiEndpoint::Sandbox,
            None => ApiEndpoint::Production,
        };

        let time_offset = match lookup(env::TIME_OFFSET) {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: i64 = raw.trim().parse().map_err(|_| {
                    DmeError::config(env::TIME_OFFSET, format!("not a whole number of seconds: '{raw}'"))
                })?;
                Duration::try_seconds(secs).ok_or_else(|| {
                    DmeError::config(env::TIME_OFFSET, format!("out of range: '{raw}'"))
                })?
            }
            _ => Duration::zero(),
        };

        Self::builder(api_key, secret_key)
            .endpoint(endpoint)
            .disable_tls_validation(lookup(env::INSECURE_TLS).is_some_and(|v| is_truthy(&v)))
            .time_offset(time_offset)
            .build()
    }

    /// Base URL every request path is resolved against. Always ends in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn tls_validation_disabled(&self) -> bool {
        self.disable_tls_validation
    }

    pub fn time_offset(&self) -> Duration {
        self.time_offset
    }

    /// The time a request issued at `now` is signed with.
    ///
    /// Falls back to `now` if the shifted time is not representable.
    pub fn signing_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.time_offset).unwrap_or(now)
    }

    /// Resolve an API path (`dns/managed/1`) against the base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| DmeError::config("path", format!("cannot join '{path}' onto base URL: {e}")))
    }
}

/// Builder for [`ClientConfig`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    credentials: Credentials,
    endpoint: ApiEndpoint,
    disable_tls_validation: bool,
    time_offset: Duration,
}

impl ClientConfigBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: ApiEndpoint::Production,
            disable_tls_validation: false,
            time_offset: Duration::zero(),
        }
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Shorthand for `endpoint(ApiEndpoint::Sandbox)`.
    #[must_use]
    pub fn sandbox(self) -> Self {
        self.endpoint(ApiEndpoint::Sandbox)
    }

    /// Skip certificate validation. Rejected by `build()` for the production endpoint.
    #[must_use]
    pub fn disable_tls_validation(mut self, disable: bool) -> Self {
        self.disable_tls_validation = disable;
        self
    }

    /// Offset added to the local clock when signing, to compensate for drift.
    /// `build()` rejects offsets beyond [`MAX_TIME_OFFSET_SECS`].
    #[must_use]
    pub fn time_offset(mut self, offset: Duration) -> Self {
        self.time_offset = offset;
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        if self.credentials.api_key.trim().is_empty() {
            return Err(DmeError::config("api_key", "must not be empty"));
        }
        if self.credentials.secret_key.trim().is_empty() {
            return Err(DmeError::config("secret_key", "must not be empty"));
        }

        let raw = self.endpoint.base_url();
        let mut base_url =
            Url::parse(raw).map_err(|e| DmeError::config("base_url", format!("'{raw}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DmeError::config(
                "base_url",
                format!("unsupported scheme '{}'", base_url.scheme()),
            ));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        if self.time_offset.num_seconds().abs() > MAX_TIME_OFFSET_SECS {
            return Err(DmeError::config(
                "time_offset",
                format!(
                    "{}s exceeds the {MAX_TIME_OFFSET_SECS}s limit",
                    self.time_offset.num_seconds()
                ),
            ));
        }

        if self.disable_tls_validation && self.endpoint == ApiEndpoint::Production {
            return Err(DmeError::config(
                "disable_tls_validation",
                "certificate validation can only be disabled for the sandbox or a custom endpoint",
            ));
        }

        Ok(ClientConfig {
            base_url,
            credentials: self.credentials,
            disable_tls_validation: self.disable_tls_validation,
            time_offset: self.time_offset,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
