use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Named category for a numeric WebAPI error code.
///
/// Synology reuses the 4xx range per API, so the same number means different
/// things for `SYNO.API.Auth` and for a resource API. Use
/// [`from_auth_code`](Self::from_auth_code) for login/logout responses and
/// [`from_common_code`](Self::from_common_code) for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// 100: unknown error.
    Unknown,
    /// 101: no parameter of API, method or version.
    MissingParameter,
    /// 102: the requested API does not exist.
    ApiNotFound,
    /// 103: the requested method does not exist.
    MethodNotFound,
    /// 104: the requested version does not support the functionality.
    VersionNotSupported,
    /// 105: the logged in session does not have permission (not logged in).
    InsufficientPrivilege,
    /// 106: session timeout.
    SessionTimeout,
    /// 107: session interrupted by duplicate login.
    SessionInterrupted,
    /// 119: SID not found.
    SessionNotFound,
    /// 400: no such account or incorrect password.
    InvalidCredentials,
    /// 401: account disabled.
    AccountDisabled,
    /// 402: permission denied.
    PermissionDenied,
    /// 403: 2-step verification code required.
    OtpRequired,
    /// 404: failed to authenticate 2-step verification code.
    OtpFailed,
    /// 406: 2-step verification is enforced for this account.
    OtpEnforced,
    /// 407: client IP is blocked.
    IpBlocked,
    /// 408-410: password expired or must be changed.
    PasswordExpired,
    /// Any code without a table entry.
    Unclassified,
}

impl ErrorCategory {
    /// Lookup table for codes shared by every WebAPI.
    pub fn from_common_code(code: i64) -> Self {
        match code {
            100 => Self::Unknown,
            101 => Self::MissingParameter,
            102 => Self::ApiNotFound,
            103 => Self::MethodNotFound,
            104 => Self::VersionNotSupported,
            105 => Self::InsufficientPrivilege,
            106 => Self::SessionTimeout,
            107 => Self::SessionInterrupted,
            119 => Self::SessionNotFound,
            _ => Self::Unclassified,
        }
    }

    /// Lookup table for `SYNO.API.Auth`; falls back to the common table.
    pub fn from_auth_code(code: i64) -> Self {
        match code {
            400 => Self::InvalidCredentials,
            401 => Self::AccountDisabled,
            402 => Self::PermissionDenied,
            403 => Self::OtpRequired,
            404 => Self::OtpFailed,
            406 => Self::OtpEnforced,
            407 => Self::IpBlocked,
            408..=410 => Self::PasswordExpired,
            _ => Self::from_common_code(code),
        }
    }
}

/// Unified error type for all WebAPI operations.
///
/// Transport-level variants (`NetworkError`, `Timeout`, `HttpStatus`) mean the
/// remote host never produced an API envelope. [`Api`](Self::Api) carries a
/// `success=false` envelope verbatim. The remaining variants are synthesized
/// locally.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SynologyError {
    /// Connection refused, TLS failure, DNS resolution failure, etc.
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// The response body is not a valid API envelope or payload.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter could not be serialized.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// A caller-supplied value was rejected before any request was made.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The remote API answered `success=false`.
    #[error("{api}.{method} failed with code {code} ({category:?})")]
    Api {
        /// API name, e.g. `SYNO.DNSServer.Zone`.
        api: String,
        /// Method name, e.g. `list`.
        method: String,
        /// Remote error code.
        code: i64,
        /// Category looked up from `code`.
        category: ErrorCategory,
        /// Remaining members of the remote `error` object.
        details: Map<String, Value>,
    },

    /// Every login version was tried and none succeeded or failed terminally.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Logout was requested without an explicit or cached session.
    #[error("No session ID provided or available")]
    NoSession,

    /// Every logout version was tried without success and no error was recorded.
    #[error("Logout failed with all API versions")]
    AllVersionsFailed,
}

impl SynologyError {
    /// Stable error code for branching and structured reporting.
    ///
    /// Remote failures yield the numeric remote code; local failures yield a
    /// sentinel such as `"unknown"` (login exhaustion) or `"no_session"`.
    /// Every transport failure, including timeouts and non-2xx statuses, is
    /// `"network_error"`; match on the variant to tell them apart.
    pub fn code(&self) -> String {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } => {
                "network_error".to_string()
            }
            Self::ParseError { .. } => "parse_error".to_string(),
            Self::SerializationError { .. } => "serialization_error".to_string(),
            Self::InvalidParameter { .. } => "invalid_parameter".to_string(),
            Self::Api { code, .. } => code.to_string(),
            Self::AuthenticationFailed => "unknown".to_string(),
            Self::NoSession => "no_session".to_string(),
            Self::AllVersionsFailed => "all_versions_failed".to_string(),
        }
    }

    /// Remote error code, if the failure came from an API envelope.
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Category of the remote error code, if any.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Api { category, .. } => Some(*category),
            _ => None,
        }
    }

    /// Whether the failure happened below the API envelope.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }

    /// 是否为预期行为（用户输入、凭证错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidParameter { .. } | Self::NoSession => true,
            Self::Api { category, .. } => matches!(
                category,
                ErrorCategory::InvalidCredentials
                    | ErrorCategory::AccountDisabled
                    | ErrorCategory::PermissionDenied
                    | ErrorCategory::OtpRequired
                    | ErrorCategory::OtpFailed
                    | ErrorCategory::OtpEnforced
                    | ErrorCategory::IpBlocked
                    | ErrorCategory::PasswordExpired
                    | ErrorCategory::InsufficientPrivilege
                    | ErrorCategory::SessionTimeout
                    | ErrorCategory::SessionInterrupted
                    | ErrorCategory::SessionNotFound
            ),
            _ => false,
        }
    }
}

/// Convenience type alias for `Result<T, SynologyError>`.
pub type Result<T> = std::result::Result<T, SynologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: i64, category: ErrorCategory) -> SynologyError {
        SynologyError::Api {
            api: "SYNO.API.Auth".to_string(),
            method: "login".to_string(),
            code,
            category,
            details: Map::new(),
        }
    }

    #[test]
    fn auth_table_maps_login_codes() {
        assert_eq!(
            ErrorCategory::from_auth_code(400),
            ErrorCategory::InvalidCredentials
        );
        assert_eq!(
            ErrorCategory::from_auth_code(401),
            ErrorCategory::AccountDisabled
        );
        assert_eq!(
            ErrorCategory::from_auth_code(402),
            ErrorCategory::PermissionDenied
        );
        assert_eq!(ErrorCategory::from_auth_code(403), ErrorCategory::OtpRequired);
        assert_eq!(ErrorCategory::from_auth_code(404), ErrorCategory::OtpFailed);
        assert_eq!(ErrorCategory::from_auth_code(407), ErrorCategory::IpBlocked);
        assert_eq!(
            ErrorCategory::from_auth_code(409),
            ErrorCategory::PasswordExpired
        );
    }

    #[test]
    fn auth_table_falls_back_to_common_codes() {
        assert_eq!(
            ErrorCategory::from_auth_code(105),
            ErrorCategory::InsufficientPrivilege
        );
        assert_eq!(
            ErrorCategory::from_auth_code(106),
            ErrorCategory::SessionTimeout
        );
        assert_eq!(
            ErrorCategory::from_auth_code(999),
            ErrorCategory::Unclassified
        );
    }

    #[test]
    fn common_table_does_not_know_auth_codes() {
        assert_eq!(
            ErrorCategory::from_common_code(400),
            ErrorCategory::Unclassified
        );
        assert_eq!(
            ErrorCategory::from_common_code(104),
            ErrorCategory::VersionNotSupported
        );
    }

    #[test]
    fn code_of_remote_error_is_numeric() {
        let e = api_error(403, ErrorCategory::OtpRequired);
        assert_eq!(e.code(), "403");
        assert_eq!(e.remote_code(), Some(403));
        assert_eq!(e.category(), Some(ErrorCategory::OtpRequired));
    }

    #[test]
    fn code_sentinels() {
        assert_eq!(SynologyError::AuthenticationFailed.code(), "unknown");
        assert_eq!(SynologyError::NoSession.code(), "no_session");
        assert_eq!(
            SynologyError::AllVersionsFailed.code(),
            "all_versions_failed"
        );
        assert_eq!(
            SynologyError::NetworkError {
                detail: "refused".into()
            }
            .code(),
            "network_error"
        );
        assert_eq!(SynologyError::NoSession.remote_code(), None);
    }

    #[test]
    fn transport_failures_share_network_code() {
        let timeout = SynologyError::Timeout {
            detail: "30s elapsed".into(),
        };
        let status = SynologyError::HttpStatus {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert_eq!(timeout.code(), "network_error");
        assert_eq!(status.code(), "network_error");
        assert!(status.is_transport());
    }

    #[test]
    fn display_api_error() {
        let e = SynologyError::Api {
            api: "SYNO.DNSServer.Zone".to_string(),
            method: "list".to_string(),
            code: 119,
            category: ErrorCategory::SessionNotFound,
            details: Map::new(),
        };
        assert_eq!(
            e.to_string(),
            "SYNO.DNSServer.Zone.list failed with code 119 (SessionNotFound)"
        );
    }

    #[test]
    fn display_http_status() {
        let e = SynologyError::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn transport_classification() {
        assert!(
            SynologyError::Timeout {
                detail: "30s".into()
            }
            .is_transport()
        );
        assert!(
            SynologyError::HttpStatus {
                status: 500,
                body: String::new()
            }
            .is_transport()
        );
        assert!(!api_error(400, ErrorCategory::InvalidCredentials).is_transport());
    }

    #[test]
    fn expected_errors() {
        assert!(api_error(400, ErrorCategory::InvalidCredentials).is_expected());
        assert!(SynologyError::NoSession.is_expected());
        assert!(
            !SynologyError::ParseError {
                detail: "bad json".into()
            }
            .is_expected()
        );
        assert!(!api_error(100, ErrorCategory::Unknown).is_expected());
    }

    #[test]
    fn serialize_tags_variant() {
        let json = serde_json::to_string(&api_error(402, ErrorCategory::PermissionDenied)).unwrap();
        assert!(json.contains("\"kind\":\"Api\""));
        assert!(json.contains("\"code\":402"));
        assert!(json.contains("\"category\":\"permission_denied\""));
    }
}
