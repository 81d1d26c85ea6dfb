//! # dnsmadeeasy-provider
//!
//! An async client for the [DNS Made Easy](https://dnsmadeeasy.com/) management
//! API (V2.0): signed requests, CRUD for managed domains, records, custom SOA
//! and vanity name server configurations, domain deletion that waits out
//! pending server-side actions, and a full account export.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! dnsmadeeasy-provider = { version = "0.1", default-features = false, features = ["rustls"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use dnsmadeeasy_provider::{ClientConfig, DnsMadeEasyClient, Domain, ManagedDns};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Configure against the sandbox
//!     let config = ClientConfig::builder("api-key", "secret-key")
//!         .sandbox()
//!         .build()?;
//!     let client = DnsMadeEasyClient::new(config)?;
//!
//!     // 2. Create a domain
//!     let domain = client.add_domain(&Domain::named("example.org")).await?;
//!
//!     // 3. List its records
//!     if let Some(id) = domain.id {
//!         for record in client.records(id).await? {
//!             println!("{} {} -> {}", record.name, record.record_type(), record.data.value());
//!         }
//!
//!         // 4. Delete it, waiting up to two minutes for pending actions
//!         client.delete_domain(id, Duration::from_secs(120)).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Creating Records
//!
//! ```rust,no_run
//! # use dnsmadeeasy_provider::*;
//! # async fn example(client: DnsMadeEasyClient, domain_id: u64) -> Result<()> {
//! let record = Record::new(
//!     "www",
//!     600,
//!     RecordData::A { address: "192.0.2.1".to_string() },
//! );
//! let created = client.add_record(domain_id, &record).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DmeError>`](DmeError). Use
//! [`DmeError::kind`] to separate configuration mistakes, transport failures,
//! API rejections, undecodable responses and deletion timeouts.
//!
//! Nothing is retried automatically except a domain delete refused because
//! the domain still has a pending action; see [`DeleteRetry`].

mod cleanup;
mod client;
mod config;
mod delete_retry;
mod envelope;
mod error;
mod export;
mod http_client;
mod traits;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

// Re-export error types
pub use error::{DmeError, ErrorKind, Result};

// Re-export configuration
pub use config::{
    ApiEndpoint, ClientConfig, ClientConfigBuilder, Credentials, MAX_TIME_OFFSET_SECS,
    PRODUCTION_API_URL, SANDBOX_API_URL, env,
};

// Re-export the client and its trait
pub use client::{DnsMadeEasyClient, RequestSignature, sign};
pub use traits::ManagedDns;

// Re-export deletion, export and cleanup helpers
pub use cleanup::{CleanupFailure, CleanupRegistry, CleanupReport, TrackedDomain};
pub use delete_retry::{
    Clock, DEFAULT_POLL_INTERVAL, DeleteRetry, PENDING_DELETE_MESSAGE, SystemClock,
    is_pending_delete,
};
pub use envelope::{GenericEnvelope, ResponseShape, decode, decode_optional};
pub use export::export_all_domains;

// Re-export types
pub use types::{
    AllDomainExport, DEFAULT_GTD_LOCATION, Domain, DomainExport, NameServer, Record, RecordData,
    RecordQuery, RecordType, Soa, Vanity,
};

// Re-export utils module
pub use utils::datetime;
