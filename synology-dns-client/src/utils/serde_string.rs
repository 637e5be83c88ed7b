//! 宽松字符串反序列化
//!
//! DSM 对同一字段时而返回字符串、时而返回数字（如 `rr_ttl`），
//! 此模块统一转换为 `String`，`null` 视为空字符串。

use serde::{Deserialize, Deserializer};

/// 反序列化：字符串 / 整数 / 浮点数 / 布尔 / null -> `String`
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        String(String),
        I64(i64),
        U64(u64),
        F64(f64),
        Bool(bool),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::String(s)) => s,
        Some(Lenient::I64(n)) => n.to_string(),
        Some(Lenient::U64(n)) => n.to_string(),
        Some(Lenient::F64(n)) => n.to_string(),
        Some(Lenient::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}
