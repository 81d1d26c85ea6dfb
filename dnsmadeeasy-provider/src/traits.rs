use std::time::Duration;

use async_trait::async_trait;

use crate::delete_retry::DeleteRetry;
use crate::error::{DmeError, Result};
use crate::export;
use crate::types::{AllDomainExport, Domain, Record, RecordQuery, Soa, Vanity};

/// DNS Made Easy management operations
///
/// Implemented over HTTP by [`DnsMadeEasyClient`](crate::DnsMadeEasyClient).
/// Everything above the raw resource calls (record lookup, domain deletion
/// with polling, account export) is provided here in terms of the required
/// methods, so alternative implementations get the same behavior.
#[async_trait]
pub trait ManagedDns: Send + Sync {
    // ==================== Domains ====================

    /// List every managed domain.
    async fn domains(&self) -> Result<Vec<Domain>>;

    /// Fetch one domain.
    async fn domain(&self, domain_id: u64) -> Result<Domain>;

    /// Create a domain. Returns the server's view, including its new id.
    async fn add_domain(&self, domain: &Domain) -> Result<Domain>;

    /// Update a domain. `domain.id` must be set.
    async fn update_domain(&self, domain: &Domain) -> Result<()>;

    /// Issue a single delete request for a domain.
    ///
    /// Fails with the pending-action API error while the domain is still being
    /// created or deleted; [`delete_domain`](Self::delete_domain) polls through that.
    async fn request_domain_deletion(&self, domain_id: u64) -> Result<()>;

    /// Delete a domain, retrying while the server reports a pending action.
    ///
    /// Gives up with [`DmeError::DeleteTimedOut`] once `timeout` has passed.
    async fn delete_domain(&self, domain_id: u64, timeout: Duration) -> Result<()> {
        DeleteRetry::new()
            .run(domain_id, timeout, || self.request_domain_deletion(domain_id))
            .await
    }

    // ==================== Records ====================

    /// List every record of a domain.
    ///
    /// A record whose type is not a [`RecordType`](crate::types::RecordType)
    /// fails the whole call with [`DmeError::UnsupportedRecordType`], and so
    /// does an export of the account that owns it.
    async fn records(&self, domain_id: u64) -> Result<Vec<Record>>;

    /// List the records of a domain matching `query`. Unknown record types
    /// fail the call as in [`records`](Self::records).
    async fn search_records(&self, domain_id: u64, query: &RecordQuery) -> Result<Vec<Record>>;

    /// Fetch one record.
    ///
    /// The API has no single-record GET; this scans the domain's records.
    async fn record(&self, domain_id: u64, record_id: u64) -> Result<Record> {
        self.records(domain_id)
            .await?
            .into_iter()
            .find(|record| record.id == Some(record_id))
            .ok_or(DmeError::RecordNotFound {
                domain_id,
                record_id,
            })
    }

    /// Create a record. Returns the server's view, including its new id.
    async fn add_record(&self, domain_id: u64, record: &Record) -> Result<Record>;

    /// Update a record. `record.id` must be set.
    async fn update_record(&self, domain_id: u64, record: &Record) -> Result<()>;

    /// Delete one record.
    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()>;

    /// Delete several records in one request. An empty list sends nothing.
    async fn delete_records(&self, domain_id: u64, record_ids: &[u64]) -> Result<()>;

    // ==================== SOA ====================

    /// List custom SOA configurations.
    async fn soa_records(&self) -> Result<Vec<Soa>>;

    async fn add_soa(&self, soa: &Soa) -> Result<Soa>;

    /// Update an SOA configuration. `soa.id` must be set.
    async fn update_soa(&self, soa: &Soa) -> Result<()>;

    async fn delete_soa(&self, soa_id: u64) -> Result<()>;

    // ==================== Vanity NS ====================

    /// List vanity name server configurations.
    async fn vanity_nameservers(&self) -> Result<Vec<Vanity>>;

    async fn add_vanity(&self, vanity: &Vanity) -> Result<Vanity>;

    /// Update a vanity configuration. `vanity.id` must be set.
    async fn update_vanity(&self, vanity: &Vanity) -> Result<()>;

    async fn delete_vanity(&self, vanity_id: u64) -> Result<()>;

    // ==================== Export ====================

    /// Snapshot every domain with its SOA, vanity name servers and records.
    ///
    /// All-or-nothing: the first failing call aborts the export.
    async fn export_all_domains(&self) -> Result<AllDomainExport> {
        export::export_all_domains(self).await
    }
}
