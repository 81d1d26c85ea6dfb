//! Tracking and bulk removal of domains created during a session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::traits::ManagedDns;
use crate::types::Domain;

/// A domain scheduled for removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedDomain {
    pub id: u64,
    pub name: String,
}

/// One domain that could not be removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupFailure {
    pub domain_id: u64,
    pub name: String,
    pub reason: String,
}

/// Outcome of [`CleanupRegistry::cleanup`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub failures: Vec<CleanupFailure>,
}

/// Caller-owned list of domains to delete later.
///
/// Typical use is a test run or a provisioning script that creates domains
/// and must remove them at the end regardless of what failed in between.
#[derive(Debug, Clone, Default)]
pub struct CleanupRegistry {
    domains: Vec<TrackedDomain>,
}

impl CleanupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a domain returned by the API. Returns `false` (and tracks
    /// nothing) when the domain has no id yet.
    pub fn track_domain(&mut self, domain: &Domain) -> bool {
        let Some(id) = domain.id else {
            log::warn!("Not tracking domain '{}': no id", domain.name);
            return false;
        };
        self.track(id, domain.name.clone());
        true
    }

    pub fn track(&mut self, id: u64, name: impl Into<String>) {
        if self.domains.iter().any(|d| d.id == id) {
            return;
        }
        self.domains.push(TrackedDomain {
            id,
            name: name.into(),
        });
    }

    pub fn tracked(&self) -> &[TrackedDomain] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Delete every tracked domain concurrently and clear the registry.
    ///
    /// Each deletion polls through pending actions for up to `timeout`. A
    /// failed deletion is logged and reported; it does not stop the others.
    pub async fn cleanup<A>(&mut self, api: &A, timeout: Duration) -> CleanupReport
    where
        A: ManagedDns + ?Sized,
    {
        let domains = std::mem::take(&mut self.domains);
        let futures: Vec<_> = domains
            .iter()
            .map(|d| api.delete_domain(d.id, timeout))
            .collect();
        let results = futures::future::join_all(futures).await;

        let mut success_count = 0;
        let mut failures = Vec::new();

        for (domain, result) in domains.into_iter().zip(results) {
            match result {
                Ok(()) => success_count += 1,
                Err(e) => {
                    log::warn!(
                        "Failed to delete domain '{}' ({}): {e}",
                        domain.name,
                        domain.id
                    );
                    failures.push(CleanupFailure {
                        domain_id: domain.id,
                        name: domain.name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        CleanupReport {
            success_count,
            failed_count: failures.len(),
            failures,
        }
    }
}
