//! Wire-level types shared by authentication and resource APIs.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ErrorCategory, Result, SynologyError};
use crate::utils::log_sanitizer::mask_secret;

// ============ API envelope ============

/// The only response shape DSM returns: `{success, data}` or
/// `{success: false, error: {code, ...}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEnvelope")]
pub enum ApiResponse {
    /// `success=true`; the `data` member (an empty object when absent).
    Success(Value),
    /// `success=false`; the error code and the rest of the `error` object.
    Failure {
        code: i64,
        details: Map<String, Value>,
    },
}

/// Code reported when a failure envelope carries no usable `error.code`.
const MISSING_ERROR_CODE: i64 = 100;

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<Map<String, Value>>,
}

impl From<RawEnvelope> for ApiResponse {
    fn from(raw: RawEnvelope) -> Self {
        if raw.success {
            return Self::Success(raw.data.unwrap_or_else(|| Value::Object(Map::new())));
        }
        let mut details = raw.error.unwrap_or_default();
        let code = details
            .remove("code")
            .and_then(|c| c.as_i64())
            .unwrap_or(MISSING_ERROR_CODE);
        Self::Failure { code, details }
    }
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert into the payload, or an [`SynologyError::Api`] tagged with
    /// the category from `classify`.
    pub fn into_result(
        self,
        api: &str,
        method: &str,
        classify: fn(i64) -> ErrorCategory,
    ) -> Result<Value> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure { code, details } => Err(SynologyError::Api {
                api: api.to_string(),
                method: method.to_string(),
                code,
                category: classify(code),
                details,
            }),
        }
    }
}

// ============ Request parameters ============

/// Which request shape to use.
///
/// Reads go out as query-string `GET`s. Mutations go out as form-encoded
/// `POST`s, the only path on which DSM reliably accepts quoted strings and
/// JSON-serialized arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A single request parameter value before form/query encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Sent as-is.
    Str(String),
    /// Wrapped in literal double quotes. DSM parses an unquoted token as a
    /// different type than a quoted one.
    Quoted(String),
    Int(i64),
    /// Sent as `true` / `false`.
    Bool(bool),
    /// Sent as compact JSON text (arrays, item lists).
    Json(Value),
}

impl ParamValue {
    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }

    pub fn encode(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Quoted(s) => format!("\"{s}\""),
            Self::Int(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Json(v) => v.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Ordered parameter mapping. Inserting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiParams {
    entries: Vec<(String, ParamValue)>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Insert only when `value` is `Some`.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn extend(&mut self, other: Self) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode every value into its wire string.
    pub fn encode(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.encode()))
            .collect()
    }
}

// ============ Session ============

/// Downstream subsystem a session is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionPurpose {
    #[default]
    FileStation,
    DownloadStation,
    DnsServer,
    /// Any other DSM session name.
    Other(String),
}

impl SessionPurpose {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FileStation => "FileStation",
            Self::DownloadStation => "DownloadStation",
            Self::DnsServer => "DNSServer",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for SessionPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SessionPurpose {
    fn from(value: &str) -> Self {
        match value {
            "FileStation" => Self::FileStation,
            "DownloadStation" => Self::DownloadStation,
            "DNSServer" => Self::DnsServer,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SessionPurpose {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SessionPurpose> for String {
    fn from(value: SessionPurpose) -> Self {
        value.as_str().to_string()
    }
}

/// Server-issued session token. Never empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SynologyError::InvalidParameter {
                param: "session_id".to_string(),
                detail: "session ID must not be empty".to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionId")
            .field(&mask_secret(&self.0))
            .finish()
    }
}

/// An authenticated session, as returned by a successful login.
///
/// This is a snapshot taken at login time: a later `terminate` does not
/// update copies already handed out. Query
/// [`SessionNegotiator::is_logged_in`](crate::SessionNegotiator::is_logged_in)
/// or `session_info` for the live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub purpose: SessionPurpose,
    /// `true` when issued; not updated afterwards.
    pub active: bool,
}

impl Session {
    pub(crate) fn new(id: SessionId, purpose: SessionPurpose) -> Self {
        Self {
            id,
            purpose,
            active: true,
        }
    }
}

/// Snapshot of a negotiator's session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub session_id: Option<String>,
    pub session_type: SessionPurpose,
    pub logged_in: bool,
}

/// DSM account credentials.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

impl Credentials {
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("password", &"****")
            .finish()
    }
}
