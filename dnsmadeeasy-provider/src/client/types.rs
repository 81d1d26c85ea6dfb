//! DNS Made Easy wire types
//!
//! Records travel as one flat object whose `type` decides which of the
//! optional fields matter. [`WireRecord`] mirrors that layout and converts to
//! and from the typed [`Record`].

use serde::{Deserialize, Serialize};

use crate::error::DmeError;
use crate::types::{DEFAULT_GTD_LOCATION, Record, RecordData, RecordType};

/// Flat record as sent to and returned by `dns/managed/{id}/records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_level: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Record> for WireRecord {
    fn from(record: &Record) -> Self {
        let mut wire = Self {
            id: record.id,
            name: record.name.clone(),
            value: record.data.value().to_string(),
            ttl: record.ttl,
            record_type: record.record_type().as_str().to_string(),
            gtd_location: Some(record.gtd_location.clone()),
            ..Self::default()
        };

        match &record.data {
            RecordData::MX { level, .. } => wire.mx_level = Some(*level),
            RecordData::SRV {
                priority,
                weight,
                port,
                ..
            } => {
                wire.priority = Some(*priority);
                wire.weight = Some(*weight);
                wire.port = Some(*port);
            }
            RecordData::HTTPRED {
                redirect_type,
                hard_link,
                title,
                keywords,
                description,
                ..
            } => {
                wire.redirect_type = Some(redirect_type.clone());
                wire.hard_link = Some(*hard_link);
                wire.title = Some(title.clone());
                wire.keywords = Some(keywords.clone());
                wire.description = Some(description.clone());
            }
            _ => {}
        }

        wire
    }
}

impl TryFrom<WireRecord> for Record {
    type Error = DmeError;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        let record_type: RecordType = wire.record_type.parse()?;
        let value = wire.value;

        let data = match record_type {
            RecordType::A => RecordData::A { address: value },
            RecordType::Aaaa => RecordData::AAAA { address: value },
            RecordType::Cname => RecordData::CNAME { target: value },
            RecordType::Aname => RecordData::ANAME { target: value },
            RecordType::Mx => RecordData::MX {
                level: wire.mx_level.unwrap_or(0),
                exchange: value,
            },
            RecordType::Httpred => RecordData::HTTPRED {
                url: value,
                redirect_type: wire.redirect_type.unwrap_or_default(),
                hard_link: wire.hard_link.unwrap_or(false),
                title: wire.title.unwrap_or_default(),
                keywords: wire.keywords.unwrap_or_default(),
                description: wire.description.unwrap_or_default(),
            },
            RecordType::Txt => RecordData::TXT { text: value },
            RecordType::Spf => RecordData::SPF { text: value },
            RecordType::Ptr => RecordData::PTR { target: value },
            RecordType::Ns => RecordData::NS { nameserver: value },
            RecordType::Srv => RecordData::SRV {
                priority: wire.priority.unwrap_or(0),
                weight: wire.weight.unwrap_or(0),
                port: wire.port.unwrap_or(0),
                target: value,
            },
        };

        Ok(Self {
            id: wire.id,
            name: wire.name,
            ttl: wire.ttl,
            gtd_location: wire
                .gtd_location
                .filter(|location| !location.is_empty())
                .unwrap_or_else(|| DEFAULT_GTD_LOCATION.to_string()),
            data,
        })
    }
}
