//! Record parameter encoding for `SYNO.DNSServer.Zone.Record`.

/// TTL used when a record is created or deleted without one.
pub const DEFAULT_RECORD_TTL: u32 = 86_400;

/// 去掉域名末尾的点
pub fn normalize_zone_name(zone: &str) -> String {
    zone.trim_end_matches('.').to_string()
}

/// Fully-qualified, dot-terminated owner name as DSM stores it.
///
/// - `"host.example.net."` (already absolute) -> unchanged
/// - `"@"` (or empty) + `"example.com"` -> `"example.com."`
/// - `"www"` + `"example.com"` -> `"www.example.com."`
pub fn fully_qualified_owner(name: &str, zone: &str) -> String {
    if name.ends_with('.') {
        return name.to_string();
    }
    let zone = normalize_zone_name(zone);
    if name == "@" || name.is_empty() {
        format!("{zone}.")
    } else {
        format!("{name}.{zone}.")
    }
}

/// Tab-delimited record line the delete method matches on:
/// `owner<TAB>ttl<TAB>type<TAB>data`.
pub fn full_record_line(owner: &str, ttl: &str, record_type: &str, data: &str) -> String {
    format!("{owner}\t{ttl}\t{record_type}\t{data}")
}
