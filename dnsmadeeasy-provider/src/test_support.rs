//! In-memory [`ManagedDns`] used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::delete_retry::PENDING_DELETE_MESSAGE;
use crate::error::{DmeError, Result};
use crate::traits::ManagedDns;
use crate::types::{Domain, Record, RecordQuery, Soa, Vanity};

/// Account state served from memory.
///
/// - `failing_domains`, `failing_soa`, `failing_vanity`: the matching list
///   call fails with a 500 naming the collection
/// - `failing_records`: `records()` fails with a network error for that domain
/// - `missing_domains`: deleting one of these fails with a 404
/// - `pending_domains`: deleting one of these always reports a pending action
#[derive(Default)]
pub(crate) struct FakeAccount {
    pub domains: Vec<Domain>,
    pub soa: Vec<Soa>,
    pub vanity: Vec<Vanity>,
    pub records: HashMap<u64, Vec<Record>>,
    pub failing_domains: bool,
    pub failing_soa: bool,
    pub failing_vanity: bool,
    pub failing_records: Option<u64>,
    pub missing_domains: HashSet<u64>,
    pub pending_domains: HashSet<u64>,
    pub record_calls: Mutex<Vec<u64>>,
    pub deleted_domains: Mutex<Vec<u64>>,
}

fn unsupported<T>() -> Result<T> {
    Err(DmeError::InvalidParameter {
        param: "operation".into(),
        detail: "not supported by the in-memory account".into(),
    })
}

fn list_failure<T>(collection: &str) -> Result<T> {
    Err(DmeError::Api {
        status: 500,
        messages: vec![format!("Could not list {collection}.")],
    })
}

#[async_trait]
impl ManagedDns for FakeAccount {
    async fn domains(&self) -> Result<Vec<Domain>> {
        if self.failing_domains {
            return list_failure("domains");
        }
        Ok(self.domains.clone())
    }

    async fn domain(&self, domain_id: u64) -> Result<Domain> {
        self.domains
            .iter()
            .find(|d| d.id == Some(domain_id))
            .cloned()
            .ok_or_else(|| DmeError::Api {
                status: 404,
                messages: vec!["Domain not found.".into()],
            })
    }

    async fn add_domain(&self, _: &Domain) -> Result<Domain> {
        unsupported()
    }

    async fn update_domain(&self, _: &Domain) -> Result<()> {
        unsupported()
    }

    async fn request_domain_deletion(&self, domain_id: u64) -> Result<()> {
        if self.missing_domains.contains(&domain_id) {
            return Err(DmeError::Api {
                status: 404,
                messages: vec!["Domain not found.".into()],
            });
        }
        if self.pending_domains.contains(&domain_id) {
            return Err(DmeError::Api {
                status: 400,
                messages: vec![PENDING_DELETE_MESSAGE.into()],
            });
        }
        self.deleted_domains.lock().unwrap().push(domain_id);
        Ok(())
    }

    async fn records(&self, domain_id: u64) -> Result<Vec<Record>> {
        self.record_calls.lock().unwrap().push(domain_id);
        if self.failing_records == Some(domain_id) {
            return Err(DmeError::Network {
                detail: "connection reset".into(),
            });
        }
        Ok(self.records.get(&domain_id).cloned().unwrap_or_default())
    }

    async fn search_records(&self, _: u64, _: &RecordQuery) -> Result<Vec<Record>> {
        unsupported()
    }

    async fn add_record(&self, _: u64, _: &Record) -> Result<Record> {
        unsupported()
    }

    async fn update_record(&self, _: u64, _: &Record) -> Result<()> {
        unsupported()
    }

    async fn delete_record(&self, _: u64, _: u64) -> Result<()> {
        unsupported()
    }

    async fn delete_records(&self, _: u64, _: &[u64]) -> Result<()> {
        unsupported()
    }

    async fn soa_records(&self) -> Result<Vec<Soa>> {
        if self.failing_soa {
            return list_failure("SOA records");
        }
        Ok(self.soa.clone())
    }

    async fn add_soa(&self, _: &Soa) -> Result<Soa> {
        unsupported()
    }

    async fn update_soa(&self, _: &Soa) -> Result<()> {
        unsupported()
    }

    async fn delete_soa(&self, _: u64) -> Result<()> {
        unsupported()
    }

    async fn vanity_nameservers(&self) -> Result<Vec<Vanity>> {
        if self.failing_vanity {
            return list_failure("vanity name servers");
        }
        Ok(self.vanity.clone())
    }

    async fn add_vanity(&self, _: &Vanity) -> Result<Vanity> {
        unsupported()
    }

    async fn update_vanity(&self, _: &Vanity) -> Result<()> {
        unsupported()
    }

    async fn delete_vanity(&self, _: u64) -> Result<()> {
        unsupported()
    }
}
