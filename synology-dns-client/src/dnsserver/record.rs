//! `SYNO.DNSServer.Zone.Record`
//!
//! `create` and `set` want every string parameter wrapped in literal quotes;
//! `delete` wants a JSON item list carrying the tab-delimited record line.

use serde_json::Value;

use crate::error::{Result, SynologyError};
use crate::types::{ApiParams, ParamValue};

use super::encoding::fully_qualified_owner;
use super::types::{
    CreateRecordRequest, DeleteRecordRequest, ItemList, Record, UpdateRecordRequest,
};
use super::{DnsServerClient, RECORD_API, from_data, zone_params};

/// Quoted `zone_name` + `domain_name`.
fn quoted_zone_params(zone_name: &str) -> ApiParams {
    ApiParams::new()
        .with("zone_name", ParamValue::quoted(zone_name))
        .with("domain_name", ParamValue::quoted(zone_name))
}

impl DnsServerClient {
    pub async fn list_records(&self, zone_name: &str) -> Result<Vec<Record>> {
        let data = self.get(RECORD_API, "list", zone_params(zone_name)).await?;
        let list: ItemList<Record> = from_data(data)?;
        Ok(list.items)
    }

    pub async fn create_record(&self, req: &CreateRecordRequest) -> Result<Value> {
        let owner = fully_qualified_owner(&req.name, &req.zone_name);
        let params = quoted_zone_params(&req.zone_name)
            .with("rr_owner", ParamValue::quoted(&owner))
            .with("rr_type", ParamValue::quoted(&req.record_type))
            .with("rr_info", ParamValue::quoted(&req.rdata))
            .with("rr_ttl", ParamValue::quoted(req.ttl.to_string()));

        log::info!("Creating {} record {owner}", req.record_type);
        self.post(RECORD_API, "create", params).await
    }

    pub async fn update_record(&self, req: &UpdateRecordRequest) -> Result<Value> {
        let mut params = quoted_zone_params(&req.zone_name)
            .with("record_key", ParamValue::quoted(&req.record_key));
        params.insert_opt(
            "rr_owner",
            req.name
                .as_deref()
                .map(|name| ParamValue::quoted(fully_qualified_owner(name, &req.zone_name))),
        );
        params.insert_opt("rr_type", req.record_type.as_deref().map(ParamValue::quoted));
        params.insert_opt("rr_info", req.rdata.as_deref().map(ParamValue::quoted));
        params.insert_opt("rr_ttl", req.ttl.map(|ttl| ParamValue::quoted(ttl.to_string())));

        self.post(RECORD_API, "set", params).await
    }

    pub async fn delete_record(&self, req: &DeleteRecordRequest) -> Result<Value> {
        self.delete_records(std::slice::from_ref(req)).await
    }

    /// Delete several records in one call.
    pub async fn delete_records(&self, reqs: &[DeleteRecordRequest]) -> Result<Value> {
        if reqs.is_empty() {
            return Err(SynologyError::InvalidParameter {
                param: "items".to_string(),
                detail: "at least one record is required".to_string(),
            });
        }
        let items: Vec<_> = reqs.iter().map(DeleteRecordRequest::to_item).collect();
        let items = serde_json::to_value(&items).map_err(|e| SynologyError::SerializationError {
            detail: e.to_string(),
        })?;

        for item in reqs {
            log::info!("Deleting {} record {}", item.record_type, item.owner);
        }
        self.post(RECORD_API, "delete", ApiParams::new().with("items", items))
            .await
    }
}
