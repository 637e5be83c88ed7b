//! SOA, per-zone configuration and daemon status.

use serde_json::Value;

use crate::error::Result;
use crate::types::ApiParams;

use super::types::UpdateSoaRequest;
use super::{
    DAEMON_STATUS_API, DnsServerClient, FORWARD_ZONE_CONF_API, MASTER_ZONE_CONF_API, SOA_API,
    zone_params,
};

impl DnsServerClient {
    pub async fn get_soa(&self, zone_name: &str) -> Result<Value> {
        self.get(SOA_API, "get", zone_params(zone_name)).await
    }

    pub async fn update_soa(&self, req: &UpdateSoaRequest) -> Result<Value> {
        let mut params = ApiParams::new().with("zone_name", &req.zone_name);
        params.insert_opt("primary_ns", req.primary_ns.as_deref());
        params.insert_opt("admin_email", req.admin_email.as_deref());
        params.insert_opt("serial", req.serial);
        params.insert_opt("refresh", req.refresh);
        params.insert_opt("retry", req.retry);
        params.insert_opt("expire", req.expire);
        params.insert_opt("ttl", req.ttl);

        self.post(SOA_API, "set", params).await
    }

    pub async fn get_master_zone_conf(&self, zone_name: &str) -> Result<Value> {
        let params = ApiParams::new().with("zone_name", zone_name);
        self.get(MASTER_ZONE_CONF_API, "get", params).await
    }

    pub async fn get_forward_zone_conf(&self, zone_name: &str) -> Result<Value> {
        let params = ApiParams::new().with("zone_name", zone_name);
        self.get(FORWARD_ZONE_CONF_API, "get", params).await
    }

    /// DNS Server daemon status.
    pub async fn get_server_status(&self) -> Result<Value> {
        self.get(DAEMON_STATUS_API, "get", ApiParams::new()).await
    }
}
