//! Connection configuration

use std::time::Duration;

use crate::error::{Result, SynologyError};

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Login/logout version candidates, newest first.
pub const DEFAULT_AUTH_VERSIONS: [u32; 4] = [7, 6, 3, 2];

const AUTH_PATH: &str = "/webapi/auth.cgi";
const ENTRY_PATH: &str = "/webapi/entry.cgi";

/// Where and how to reach a DSM host.
#[derive(Debug, Clone)]
pub struct SynologyConfig {
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
    accept_invalid_certs: bool,
    auth_versions: Vec<u32>,
}

impl SynologyConfig {
    /// Configuration with every default, e.g. `https://nas.local:5001`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> SynologyConfigBuilder {
        SynologyConfigBuilder::new(base_url.into())
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authentication endpoint (`SYNO.API.Auth`).
    pub fn auth_url(&self) -> String {
        format!("{}{AUTH_PATH}", self.base_url)
    }

    /// Generic resource endpoint.
    pub fn entry_url(&self) -> String {
        format!("{}{ENTRY_PATH}", self.base_url)
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// NAS units usually serve self-signed certificates, so this defaults to `true`.
    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Ordered login/logout version candidates.
    pub fn auth_versions(&self) -> &[u32] {
        &self.auth_versions
    }
}

/// Builder for [`SynologyConfig`]
pub struct SynologyConfigBuilder {
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
    accept_invalid_certs: bool,
    auth_versions: Vec<u32>,
}

impl SynologyConfigBuilder {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            accept_invalid_certs: true,
            auth_versions: DEFAULT_AUTH_VERSIONS.to_vec(),
        }
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Override the login/logout version candidates (tried in the given order).
    pub fn auth_versions(mut self, versions: impl Into<Vec<u32>>) -> Self {
        self.auth_versions = versions.into();
        self
    }

    pub fn build(self) -> Result<SynologyConfig> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SynologyError::InvalidParameter {
                param: "base_url".to_string(),
                detail: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }
        if self.auth_versions.is_empty() {
            return Err(SynologyError::InvalidParameter {
                param: "auth_versions".to_string(),
                detail: "at least one version candidate is required".to_string(),
            });
        }

        Ok(SynologyConfig {
            base_url,
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            accept_invalid_certs: self.accept_invalid_certs,
            auth_versions: self.auth_versions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SynologyConfig::new("https://nas.local:5001").unwrap();
        assert_eq!(config.auth_versions(), &[7, 6, 3, 2]);
        assert!(config.accept_invalid_certs());
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn endpoints_strip_trailing_slash() {
        let config = SynologyConfig::new("https://nas.local:5001/").unwrap();
        assert_eq!(config.base_url(), "https://nas.local:5001");
        assert_eq!(config.auth_url(), "https://nas.local:5001/webapi/auth.cgi");
        assert_eq!(config.entry_url(), "https://nas.local:5001/webapi/entry.cgi");
    }

    #[test]
    fn builder_overrides() {
        let config = SynologyConfig::builder("http://10.0.0.2:5000")
            .auth_versions(vec![6, 3])
            .accept_invalid_certs(false)
            .request_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.auth_versions(), &[6, 3]);
        assert!(!config.accept_invalid_certs());
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_non_http_url() {
        let result = SynologyConfig::new("nas.local:5001");
        assert!(matches!(
            result,
            Err(SynologyError::InvalidParameter { ref param, .. }) if param == "base_url"
        ));
    }

    #[test]
    fn rejects_empty_version_list() {
        let result = SynologyConfig::builder("https://nas.local")
            .auth_versions(Vec::new())
            .build();
        assert!(matches!(
            result,
            Err(SynologyError::InvalidParameter { ref param, .. }) if param == "auth_versions"
        ));
    }
}
