//! Synology DNS Server
//!
//! Zone, record, SOA and daemon operations layered on [`WebApiClient::call`].
//! Reads use `GET`, mutations use form `POST`; every call is version 1.

pub mod encoding;
mod record;
mod soa;
mod types;
mod zone;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SynologyError};
use crate::types::{ApiParams, Verb};
use crate::webapi::WebApiClient;

pub use types::{
    CreateMasterZoneRequest, CreateRecordRequest, DeleteRecordRequest, DomainType, Record,
    UpdateRecordRequest, UpdateSoaRequest, Zone, ZoneFileType, ZoneType,
};

pub(crate) const ZONE_API: &str = "SYNO.DNSServer.Zone";
pub(crate) const RECORD_API: &str = "SYNO.DNSServer.Zone.Record";
pub(crate) const SOA_API: &str = "SYNO.DNSServer.Zone.SOA";
pub(crate) const MASTER_ZONE_CONF_API: &str = "SYNO.DNSServer.Zone.MasterZoneConf";
pub(crate) const FORWARD_ZONE_CONF_API: &str = "SYNO.DNSServer.Zone.ForwardZoneConf";
pub(crate) const DAEMON_STATUS_API: &str = "SYNO.DNSServer.DaemonStatus";
pub(crate) const API_VERSION: u32 = 1;

/// DNS Server client bound to one session.
#[derive(Clone)]
pub struct DnsServerClient {
    api: WebApiClient,
}

impl DnsServerClient {
    pub fn new(api: WebApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &WebApiClient {
        &self.api
    }

    async fn get(&self, api: &str, method: &str, params: ApiParams) -> Result<Value> {
        self.api
            .call(api, API_VERSION, method, Verb::Get, params)
            .await
    }

    async fn post(&self, api: &str, method: &str, params: ApiParams) -> Result<Value> {
        self.api
            .call(api, API_VERSION, method, Verb::Post, params)
            .await
    }
}

/// `zone_name` + `domain_name`, which most zone-scoped reads require together.
fn zone_params(zone_name: &str) -> ApiParams {
    ApiParams::new()
        .with("zone_name", zone_name)
        .with("domain_name", zone_name)
}

fn from_data<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| {
        log::error!("Unexpected DNS Server payload: {e}");
        SynologyError::ParseError {
            detail: e.to_string(),
        }
    })
}
