//! `ManagedDns` implementation for DNS Made Easy

use async_trait::async_trait;

use crate::envelope::ResponseShape;
use crate::error::{DmeError, Result};
use crate::traits::ManagedDns;
use crate::types::{Domain, Record, RecordQuery, Soa, Vanity};

use super::DnsMadeEasyClient;
use super::types::WireRecord;

const DOMAINS_PATH: &str = "dns/managed/";
const SOA_PATH: &str = "dns/soa";
const VANITY_PATH: &str = "dns/vanity";

fn domain_path(domain_id: u64) -> String {
    format!("{DOMAINS_PATH}{domain_id}")
}

fn records_path(domain_id: u64) -> String {
    format!("{DOMAINS_PATH}{domain_id}/records")
}

fn record_path(domain_id: u64, record_id: u64) -> String {
    format!("{DOMAINS_PATH}{domain_id}/records/{record_id}")
}

/// Updates address the resource by id; refuse before touching the network.
fn require_id(id: Option<u64>, param: &str) -> Result<u64> {
    id.ok_or_else(|| DmeError::InvalidParameter {
        param: param.to_string(),
        detail: "an id is required to update a resource".to_string(),
    })
}

fn into_records(wire: Vec<WireRecord>) -> Result<Vec<Record>> {
    wire.into_iter().map(Record::try_from).collect()
}

#[async_trait]
impl ManagedDns for DnsMadeEasyClient {
    async fn domains(&self) -> Result<Vec<Domain>> {
        self.get(DOMAINS_PATH, &[], ResponseShape::Enveloped).await
    }

    async fn domain(&self, domain_id: u64) -> Result<Domain> {
        self.get(&domain_path(domain_id), &[], ResponseShape::Bare)
            .await
    }

    async fn add_domain(&self, domain: &Domain) -> Result<Domain> {
        let created: Domain = self.post(DOMAINS_PATH, domain).await?;
        log::debug!("Created domain '{}' with id {:?}", created.name, created.id);
        Ok(created)
    }

    async fn update_domain(&self, domain: &Domain) -> Result<()> {
        let domain_id = require_id(domain.id, "domain.id")?;
        self.put(&domain_path(domain_id), domain).await
    }

    async fn request_domain_deletion(&self, domain_id: u64) -> Result<()> {
        self.delete(&domain_path(domain_id), &[]).await
    }

    async fn records(&self, domain_id: u64) -> Result<Vec<Record>> {
        let wire: Vec<WireRecord> = self
            .get(&records_path(domain_id), &[], ResponseShape::Enveloped)
            .await?;
        into_records(wire)
    }

    async fn search_records(&self, domain_id: u64, query: &RecordQuery) -> Result<Vec<Record>> {
        let wire: Vec<WireRecord> = self
            .get(
                &records_path(domain_id),
                &query.to_query_pairs(),
                ResponseShape::Enveloped,
            )
            .await?;
        into_records(wire)
    }

    async fn add_record(&self, domain_id: u64, record: &Record) -> Result<Record> {
        let created: WireRecord = self
            .post(&records_path(domain_id), &WireRecord::from(record))
            .await?;
        Record::try_from(created)
    }

    async fn update_record(&self, domain_id: u64, record: &Record) -> Result<()> {
        let record_id = require_id(record.id, "record.id")?;
        self.put(
            &record_path(domain_id, record_id),
            &WireRecord::from(record),
        )
        .await
    }

    async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        self.delete(&record_path(domain_id, record_id), &[]).await
    }

    async fn delete_records(&self, domain_id: u64, record_ids: &[u64]) -> Result<()> {
        if record_ids.is_empty() {
            log::debug!("No records to delete in domain {domain_id}");
            return Ok(());
        }
        let query: Vec<(&str, String)> = record_ids
            .iter()
            .map(|id| ("ids", id.to_string()))
            .collect();
        self.delete(&records_path(domain_id), &query).await
    }

    async fn soa_records(&self) -> Result<Vec<Soa>> {
        self.get(SOA_PATH, &[], ResponseShape::Enveloped).await
    }

    async fn add_soa(&self, soa: &Soa) -> Result<Soa> {
        self.post(SOA_PATH, soa).await
    }

    async fn update_soa(&self, soa: &Soa) -> Result<()> {
        let soa_id = require_id(soa.id, "soa.id")?;
        self.put(&format!("{SOA_PATH}/{soa_id}"), soa).await
    }

    async fn delete_soa(&self, soa_id: u64) -> Result<()> {
        self.delete(&format!("{SOA_PATH}/{soa_id}"), &[]).await
    }

    async fn vanity_nameservers(&self) -> Result<Vec<Vanity>> {
        self.get(VANITY_PATH, &[], ResponseShape::Enveloped).await
    }

    async fn add_vanity(&self, vanity: &Vanity) -> Result<Vanity> {
        self.post(VANITY_PATH, vanity).await
    }

    async fn update_vanity(&self, vanity: &Vanity) -> Result<()> {
        let vanity_id = require_id(vanity.id, "vanity.id")?;
        self.put(&format!("{VANITY_PATH}/{vanity_id}"), vanity)
            .await
    }

    async fn delete_vanity(&self, vanity_id: u64) -> Result<()> {
        self.delete(&format!("{VANITY_PATH}/{vanity_id}"), &[])
            .await
    }
}
