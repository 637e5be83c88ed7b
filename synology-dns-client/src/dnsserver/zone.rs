//! `SYNO.DNSServer.Zone`

use serde_json::Value;

use crate::error::Result;
use crate::types::ApiParams;

use super::types::{CreateMasterZoneRequest, ExportedZone, ItemList, Zone, ZoneFileType};
use super::{DnsServerClient, ZONE_API, from_data, zone_params};

impl DnsServerClient {
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        let data = self.get(ZONE_API, "list", ApiParams::new()).await?;
        let list: ItemList<Zone> = from_data(data)?;
        Ok(list.items)
    }

    /// Zone configuration as returned by DSM.
    pub async fn get_zone(&self, zone_name: &str) -> Result<Value> {
        self.get(ZONE_API, "get", zone_params(zone_name)).await
    }

    pub async fn create_master_zone(&self, req: &CreateMasterZoneRequest) -> Result<Value> {
        let mut params = ApiParams::new()
            .with("zone_name", &req.zone_name)
            .with("refresh", req.refresh)
            .with("retry", req.retry)
            .with("expire", req.expire)
            .with("ttl", req.ttl);
        params.insert_opt("serial", req.serial);

        log::info!("Creating master zone {}", req.zone_name);
        self.post(ZONE_API, "create", params).await
    }

    /// Forward zone resolving through `forwarders` (sent comma-separated).
    pub async fn create_forward_zone(
        &self,
        zone_name: &str,
        forwarders: &[String],
    ) -> Result<Value> {
        let params = ApiParams::new()
            .with("zone_name", zone_name)
            .with("zone_type", "forward")
            .with("forwarders", forwarders.join(","));

        log::info!("Creating forward zone {zone_name}");
        self.post(ZONE_API, "create", params).await
    }

    pub async fn delete_zone(&self, zone_name: &str) -> Result<Value> {
        let params = ApiParams::new().with("zone_name", zone_name);
        log::info!("Deleting zone {zone_name}");
        self.post(ZONE_API, "delete", params).await
    }

    pub async fn set_zone_enabled(&self, zone_name: &str, enabled: bool) -> Result<Value> {
        let params = zone_params(zone_name).with("zone_enable", enabled);
        self.post(ZONE_API, "set", params).await
    }

    pub async fn enable_zone(&self, zone_name: &str) -> Result<Value> {
        self.set_zone_enabled(zone_name, true).await
    }

    pub async fn disable_zone(&self, zone_name: &str) -> Result<Value> {
        self.set_zone_enabled(zone_name, false).await
    }

    /// Zone file text; empty when DSM returns none.
    pub async fn export_zone(&self, zone_name: &str, file_type: ZoneFileType) -> Result<String> {
        let params = zone_params(zone_name).with("file_type", file_type.as_str());
        let data = self.get(ZONE_API, "export", params).await?;
        let exported: ExportedZone = from_data(data)?;
        Ok(exported.zone_file)
    }

    pub async fn import_zone(&self, zone_name: &str, zone_content: &str) -> Result<Value> {
        let params = ApiParams::new()
            .with("zone_name", zone_name)
            .with("zone_content", zone_content);
        self.post(ZONE_API, "import", params).await
    }
}
