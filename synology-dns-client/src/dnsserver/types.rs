//! Synology DNS Server API type definition

use serde::{Deserialize, Serialize};

use super::encoding::{DEFAULT_RECORD_TTL, full_record_line};

// ============ Response payloads ============

/// `{"items": [...]}` wrapper used by list methods.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Payload of `SYNO.DNSServer.Zone` `export`.
#[derive(Debug, Deserialize)]
pub(crate) struct ExportedZone {
    #[serde(default)]
    pub zone_file: String,
}

// ============ Zone ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Master,
    Slave,
    Forward,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Forward,
    Reverse,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A zone as listed by `SYNO.DNSServer.Zone` `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub zone_name: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub zone_type: ZoneType,
    #[serde(default)]
    pub domain_type: DomainType,
    #[serde(rename = "zone_enable", default)]
    pub enabled: bool,
    #[serde(rename = "is_readonly", default)]
    pub read_only: bool,
}

/// Which zone file `export` should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneFileType {
    #[default]
    Master,
    Forward,
    Slave,
}

impl ZoneFileType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Forward => "forward",
            Self::Slave => "slave",
        }
    }
}

/// Parameters of a new master zone. Intervals are in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMasterZoneRequest {
    pub zone_name: String,
    /// Left to DSM when `None`.
    pub serial: Option<u32>,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub ttl: u32,
}

impl CreateMasterZoneRequest {
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
            serial: None,
            refresh: 10_800,
            retry: 3_600,
            expire: 604_800,
            ttl: 86_400,
        }
    }
}

// ============ Record ============

/// A resource record as listed by `SYNO.DNSServer.Zone.Record` `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "record_key", default)]
    pub key: String,
    /// Fully-qualified owner, e.g. `www.example.com.`
    #[serde(rename = "rr_owner", default)]
    pub owner_name: String,
    #[serde(rename = "rr_type", default)]
    pub record_type: String,
    #[serde(rename = "rr_info", default)]
    pub record_data: String,
    #[serde(
        rename = "rr_ttl",
        default,
        deserialize_with = "crate::utils::serde_string::deserialize"
    )]
    pub ttl: String,
    /// Tab-delimited line as DSM renders it.
    #[serde(rename = "full_record", default)]
    pub raw_line: String,
}

/// New record. `name` is relative (`www`), `@` for the apex, or absolute
/// when dot-terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordRequest {
    pub zone_name: String,
    pub name: String,
    pub record_type: String,
    pub rdata: String,
    pub ttl: u32,
}

impl CreateRecordRequest {
    pub fn new(
        zone_name: impl Into<String>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        rdata: impl Into<String>,
    ) -> Self {
        Self {
            zone_name: zone_name.into(),
            name: name.into(),
            record_type: record_type.into(),
            rdata: rdata.into(),
            ttl: DEFAULT_RECORD_TTL,
        }
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Partial update of the record identified by `record_key`; `None` fields
/// are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRecordRequest {
    pub zone_name: String,
    pub record_key: String,
    pub name: Option<String>,
    pub record_type: Option<String>,
    pub rdata: Option<String>,
    pub ttl: Option<u32>,
}

/// Record to delete. DSM matches the synthesized line, so the fields must
/// equal what the server stores: absolute owner and the stored TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordRequest {
    pub zone_name: String,
    /// Fully-qualified owner, e.g. `www.example.com.`
    pub owner: String,
    pub record_type: String,
    pub rdata: String,
    /// Kept as text so the line matches DSM's rendering byte for byte.
    /// Defaults to `86400` when `None`.
    pub ttl: Option<String>,
}

impl DeleteRecordRequest {
    /// Delete request for a record obtained from `list_records`.
    pub fn from_record(zone_name: impl Into<String>, record: &Record) -> Self {
        Self {
            zone_name: zone_name.into(),
            owner: record.owner_name.clone(),
            record_type: record.record_type.clone(),
            rdata: record.record_data.clone(),
            ttl: (!record.ttl.is_empty()).then(|| record.ttl.clone()),
        }
    }

    pub(crate) fn to_item(&self) -> DeleteRecordItem {
        let ttl = self
            .ttl
            .clone()
            .unwrap_or_else(|| DEFAULT_RECORD_TTL.to_string());
        DeleteRecordItem {
            zone_name: self.zone_name.clone(),
            domain_name: self.zone_name.clone(),
            rr_owner: self.owner.clone(),
            rr_type: self.record_type.clone(),
            full_record: full_record_line(&self.owner, &ttl, &self.record_type, &self.rdata),
            rr_ttl: ttl,
            rr_info: self.rdata.clone(),
        }
    }
}

/// One element of the `items` JSON parameter of `Record` `delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DeleteRecordItem {
    pub zone_name: String,
    pub domain_name: String,
    pub rr_owner: String,
    pub rr_type: String,
    pub rr_ttl: String,
    pub rr_info: String,
    pub full_record: String,
}

// ============ SOA ============

/// SOA fields to change; `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSoaRequest {
    pub zone_name: String,
    pub primary_ns: Option<String>,
    pub admin_email: Option<String>,
    pub serial: Option<u32>,
    pub refresh: Option<u32>,
    pub retry: Option<u32>,
    pub expire: Option<u32>,
    pub ttl: Option<u32>,
}

impl UpdateSoaRequest {
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
            ..Self::default()
        }
    }
}
