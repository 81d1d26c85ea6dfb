//! Account export
//!
//! Joins domains with the SOA and vanity configurations they reference and
//! with their records, keyed by domain name.

use crate::error::Result;
use crate::traits::ManagedDns;
use crate::types::{AllDomainExport, DomainExport};

/// Build a denormalized snapshot of every domain in the account.
///
/// Lists domains, SOA and vanity configurations once, then fetches each
/// domain's records in turn. A foreign key of `0` or one pointing at a
/// configuration that no longer exists resolves to `None`. Two domains with
/// the same name keep the later one.
pub async fn export_all_domains<A>(api: &A) -> Result<AllDomainExport>
where
    A: ManagedDns + ?Sized,
{
    let domains = api.domains().await?;
    let soa_records = api.soa_records().await?;
    let vanity_nameservers = api.vanity_nameservers().await?;

    log::debug!(
        "Exporting {} domains ({} SOA, {} vanity configurations)",
        domains.len(),
        soa_records.len(),
        vanity_nameservers.len()
    );

    let mut export = AllDomainExport::new();
    for domain in domains {
        let soa = domain.soa_ref().and_then(|soa_id| {
            soa_records
                .iter()
                .find(|soa| soa.id == Some(soa_id))
                .cloned()
        });
        let default_ns = domain.vanity_ref().and_then(|vanity_id| {
            vanity_nameservers
                .iter()
                .find(|vanity| vanity.id == Some(vanity_id))
                .cloned()
        });

        let Some(domain_id) = domain.id else {
            log::warn!("Skipping records of domain '{}': no id", domain.name);
            export.insert(
                domain.name.clone(),
                DomainExport {
                    info: domain,
                    soa,
                    default_ns,
                    records: Vec::new(),
                },
            );
            continue;
        };

        let records = api.records(domain_id).await?;
        export.insert(
            domain.name.clone(),
            DomainExport {
                info: domain,
                soa,
                default_ns,
                records,
            },
        );
    }

    Ok(export)
}
