use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DmeError;

// ============ Domain Types ============

/// A name server assigned to a managed domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameServer {
    /// Fully qualified host name.
    #[serde(default)]
    pub fqdn: String,
    /// IPv4 address, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<String>,
    /// IPv6 address, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
}

/// A domain (zone) managed by DNS Made Easy.
///
/// Fields the server assigns (`id`, timestamps, name servers, pending action)
/// are optional and left out of request bodies while unset, so a `Domain`
/// carrying only a name is a valid create request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Domain name (e.g., `"example.com"`).
    pub name: String,
    /// Custom SOA record in use. `None` or `0` means the account default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa_id: Option<u64>,
    /// Vanity name server set in use. `None` or `0` means the account default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vanity_id: Option<u64>,
    /// Template applied to the domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    /// Folder the domain is filed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    /// Global traffic director enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_enabled: Option<bool>,
    /// Name servers the domain is delegated to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_servers: Vec<NameServer>,
    /// When the domain was created.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the domain was last updated.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Whether the domain is processed on multiple name server clusters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_multi: Option<bool>,
    /// Third-party integrations active on the domain.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_third_parties: Vec<String>,
    /// Non-zero while the server is still processing an operation on the domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_action_id: Option<u64>,
}

impl Domain {
    /// A create request for `name` with every other field left to the server.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// SOA foreign key, with `0` normalized to `None`.
    pub fn soa_ref(&self) -> Option<u64> {
        self.soa_id.filter(|id| *id != 0)
    }

    /// Vanity foreign key, with `0` normalized to `None`.
    pub fn vanity_ref(&self) -> Option<u64> {
        self.vanity_id.filter(|id| *id != 0)
    }
}

// ============ SOA / Vanity Types ============

/// A custom Start of Authority configuration, assignable to domains.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Soa {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name of the SOA configuration.
    pub name: String,
    /// Responsible-person mailbox, in DNS form (`hostmaster.example.com.`).
    #[serde(default)]
    pub email: String,
    /// Primary name server.
    #[serde(default)]
    pub comp: String,
    /// TTL of the SOA record in seconds.
    #[serde(default)]
    pub ttl: u32,
    /// Starting serial number.
    #[serde(default)]
    pub serial: u32,
    /// Refresh interval in seconds.
    #[serde(default)]
    pub refresh: u32,
    /// Retry interval in seconds.
    #[serde(default)]
    pub retry: u32,
    /// Expire time in seconds.
    #[serde(default)]
    pub expire: u32,
    /// Negative cache TTL in seconds.
    #[serde(default)]
    pub negative_cache: u32,
}

/// A custom (vanity) name server set, assignable to domains.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vanity {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name of the vanity configuration.
    pub name: String,
    /// Host names of the vanity name servers.
    #[serde(default)]
    pub servers: Vec<String>,
    /// Whether the configuration is shared publicly.
    #[serde(default)]
    pub public: bool,
    /// Whether this is the account default.
    #[serde(default)]
    pub default: bool,
    /// Name server group the vanity names map to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_server_group_id: Option<u64>,
    /// Name of that name server group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_server_group: Option<String>,
}

// ============ DNS Record Types ============

/// DNS record type tag, as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Apex alias record resolved by the provider.
    Aname,
    /// Mail exchange record.
    Mx,
    /// HTTP redirection record.
    Httpred,
    /// Text record.
    Txt,
    /// Sender policy framework record.
    Spf,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
}

impl RecordType {
    /// Upper-case wire spelling of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Aname => "ANAME",
            Self::Mx => "MX",
            Self::Httpred => "HTTPRED",
            Self::Txt => "TXT",
            Self::Spf => "SPF",
            Self::Ptr => "PTR",
            Self::Ns => "NS",
            Self::Srv => "SRV",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DmeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "ANAME" => Ok(Self::Aname),
            "MX" => Ok(Self::Mx),
            "HTTPRED" => Ok(Self::Httpred),
            "TXT" => Ok(Self::Txt),
            "SPF" => Ok(Self::Spf),
            "PTR" => Ok(Self::Ptr),
            "NS" => Ok(Self::Ns),
            "SRV" => Ok(Self::Srv),
            _ => Err(DmeError::UnsupportedRecordType {
                record_type: s.to_string(),
            }),
        }
    }
}

/// Type-safe representation of DNS record data.
///
/// Each variant carries only the fields meaningful for that record type.
/// Use [`record_type()`](Self::record_type) to get the [`RecordType`] tag,
/// or [`value()`](Self::value) for the primary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record: maps a hostname to an IPv4 address.
    A {
        /// IPv4 address (e.g., `"192.0.2.1"`).
        address: String,
    },

    /// AAAA record: maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address (e.g., `"2001:db8::1"`).
        address: String,
    },

    /// CNAME record: alias from one name to another.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// ANAME record: CNAME-like alias usable at the zone apex.
    ANAME {
        /// Target hostname.
        target: String,
    },

    /// MX record: mail exchange server.
    MX {
        /// Preference level (lower = preferred).
        level: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// HTTP redirection served by the provider's web forwarders.
    HTTPRED {
        /// Destination URL.
        url: String,
        /// Redirect kind, e.g. `"STANDARD - 301"`, `"STANDARD - 302"`, `"Hidden Frame Masked"`.
        redirect_type: String,
        /// Whether the requested path is appended to the destination.
        hard_link: bool,
        /// Page title for masked redirects.
        title: String,
        /// Meta keywords for masked redirects.
        keywords: String,
        /// Meta description for masked redirects.
        description: String,
    },

    /// TXT record: arbitrary text data.
    TXT {
        /// Text content.
        text: String,
    },

    /// SPF record: sender policy text.
    SPF {
        /// Policy text.
        text: String,
    },

    /// PTR record: reverse lookup target.
    PTR {
        /// Target hostname.
        target: String,
    },

    /// NS record: authoritative name server.
    NS {
        /// Name server hostname.
        nameserver: String,
    },

    /// SRV record: service locator.
    SRV {
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },
}

impl RecordData {
    /// Returns the [`RecordType`] tag for this record data.
    pub const fn record_type(&self) -> RecordType {
        match self {
            Self::A { .. } => RecordType::A,
            Self::AAAA { .. } => RecordType::Aaaa,
            Self::CNAME { .. } => RecordType::Cname,
            Self::ANAME { .. } => RecordType::Aname,
            Self::MX { .. } => RecordType::Mx,
            Self::HTTPRED { .. } => RecordType::Httpred,
            Self::TXT { .. } => RecordType::Txt,
            Self::SPF { .. } => RecordType::Spf,
            Self::PTR { .. } => RecordType::Ptr,
            Self::NS { .. } => RecordType::Ns,
            Self::SRV { .. } => RecordType::Srv,
        }
    }

    /// The record's primary value: what the API carries in its `value` field.
    pub fn value(&self) -> &str {
        match self {
            Self::A { address } | Self::AAAA { address } => address,
            Self::CNAME { target }
            | Self::ANAME { target }
            | Self::PTR { target }
            | Self::SRV { target, .. } => target,
            Self::MX { exchange, .. } => exchange,
            Self::HTTPRED { url, .. } => url,
            Self::TXT { text } | Self::SPF { text } => text,
            Self::NS { nameserver } => nameserver,
        }
    }
}

/// Default global traffic director location.
pub const DEFAULT_GTD_LOCATION: &str = "DEFAULT";

/// A DNS record inside a managed domain. The owning domain is implied by the
/// request path, not stored on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Record name relative to the domain (`""` for the apex).
    pub name: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Global traffic director location (`"DEFAULT"` unless GTD is in use).
    pub gtd_location: String,
    /// Type-specific record data.
    pub data: RecordData,
}

impl Record {
    /// A create request with the default GTD location.
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            id: None,
            name: name.into(),
            ttl,
            gtd_location: DEFAULT_GTD_LOCATION.to_string(),
            data,
        }
    }

    /// Shorthand for `self.data.record_type()`.
    pub const fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

/// Filters for record listing. Empty filters list every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    /// Exact record name to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Record type to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
}

impl RecordQuery {
    /// Query string pairs understood by the records endpoint.
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("recordName", name.clone()));
        }
        if let Some(record_type) = self.record_type {
            pairs.push(("type", record_type.to_string()));
        }
        pairs
    }
}

// ============ Export Types ============

/// Denormalized snapshot of one domain: the domain itself, its resolved SOA
/// and vanity configuration, and every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainExport {
    /// The domain summary.
    pub info: Domain,
    /// Custom SOA in use, `None` when the domain uses the default or the reference is dangling.
    pub soa: Option<Soa>,
    /// Vanity name servers in use, `None` when the domain uses the default.
    pub default_ns: Option<Vanity>,
    /// All records of the domain.
    pub records: Vec<Record>,
}

/// Every managed domain keyed by domain name.
pub type AllDomainExport = BTreeMap<String, DomainExport>;
