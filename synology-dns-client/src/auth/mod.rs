//! Session negotiation against `SYNO.API.Auth`
//!
//! The DSM auth API version a host speaks is unknown up front, so login and
//! logout walk the configured version candidates (newest first) until one
//! succeeds or a failure is classified as terminal.

mod policy;

use std::sync::Arc;

use serde_json::Value;

use crate::config::SynologyConfig;
use crate::dnsserver::DnsServerClient;
use crate::error::{ErrorCategory, Result, SynologyError};
use crate::http_client::{HttpTransport, ReqwestTransport};
use crate::types::{ApiParams, Credentials, Session, SessionId, SessionInfo, SessionPurpose, Verb};
use crate::webapi::{WebApiClient, send_api_request};

use policy::{Attempt, FallbackPolicy, LoginPolicy, LogoutPolicy};

pub(crate) const AUTH_API: &str = "SYNO.API.Auth";
/// Ask DSM to return the session ID in the response body.
const SESSION_FORMAT: &str = "sid";

/// Obtains and relinquishes sessions; owns at most one cached session.
///
/// `authenticate` and `terminate` take `&mut self`: sharing one negotiator
/// across tasks needs external locking. Independent negotiators share nothing.
pub struct SessionNegotiator {
    transport: Arc<dyn HttpTransport>,
    config: SynologyConfig,
    current_session: Option<Session>,
}

impl SessionNegotiator {
    /// Negotiator using the default reqwest transport.
    pub fn new(config: SynologyConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: SynologyConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            config,
            current_session: None,
        }
    }

    pub fn config(&self) -> &SynologyConfig {
        &self.config
    }

    /// Transport shared with resource clients built from this negotiator.
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.transport)
    }

    /// Log in for `purpose`, trying each version candidate in order.
    ///
    /// Returns the first successful session and caches it. Credential
    /// rejections (400/402/403/404) stop immediately. Everything else,
    /// including transport failures, moves on to the next version. When the
    /// candidates run out, returns [`SynologyError::AuthenticationFailed`].
    ///
    /// A previously cached session is replaced without being logged out.
    pub async fn authenticate(
        &mut self,
        credentials: &Credentials,
        purpose: SessionPurpose,
    ) -> Result<Session> {
        for &version in self.config.auth_versions() {
            let params = ApiParams::new()
                .with("api", AUTH_API)
                .with("version", version)
                .with("method", "login")
                .with("account", &credentials.account)
                .with("passwd", &credentials.password)
                .with("session", purpose.as_str())
                .with("format", SESSION_FORMAT);

            let outcome = self
                .auth_request("login", &params)
                .await
                .and_then(|data| extract_session_id(&data));

            match LoginPolicy::classify(outcome) {
                Attempt::Success(id) => {
                    log::info!(
                        "Logged in as '{}' for {purpose} (auth API v{version})",
                        credentials.account
                    );
                    let session = Session::new(id, purpose);
                    self.current_session = Some(session.clone());
                    return Ok(session);
                }
                Attempt::Terminal(e) => {
                    log::warn!("Login rejected (v{version}): {e}");
                    return Err(e);
                }
                Attempt::Retryable(e) => {
                    log::warn!("Login via v{version} failed, trying next version: {e}");
                }
            }
        }

        log::warn!("Login failed with every auth API version");
        Err(SynologyError::AuthenticationFailed)
    }

    /// Log in with a `FileStation` session.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Session> {
        self.authenticate(credentials, SessionPurpose::FileStation)
            .await
    }

    pub async fn login_download_station(&mut self, credentials: &Credentials) -> Result<Session> {
        self.authenticate(credentials, SessionPurpose::DownloadStation)
            .await
    }

    pub async fn login_dns_server(&mut self, credentials: &Credentials) -> Result<Session> {
        self.authenticate(credentials, SessionPurpose::DnsServer)
            .await
    }

    /// Log out `session_id` (default: the cached session) for `purpose`
    /// (default: the cached session's purpose).
    ///
    /// Fails with [`SynologyError::NoSession`] without any request when no
    /// session is available. Codes 105/106 stop the version walk; any other
    /// failure is remembered and the next version is tried. On exhaustion the
    /// last failure is returned, or [`SynologyError::AllVersionsFailed`].
    ///
    /// Clears the cached session when it is the one logged out.
    pub async fn terminate(
        &mut self,
        session_id: Option<&SessionId>,
        purpose: Option<SessionPurpose>,
    ) -> Result<()> {
        let cached = self.current_session.as_ref();
        let Some(session_id) = session_id.or(cached.map(|s| &s.id)).cloned() else {
            return Err(SynologyError::NoSession);
        };
        let purpose = purpose
            .or_else(|| cached.map(|s| s.purpose.clone()))
            .unwrap_or_default();

        let mut last_error = None;

        for &version in self.config.auth_versions() {
            let params = ApiParams::new()
                .with("api", AUTH_API)
                .with("version", version)
                .with("method", "logout")
                .with("session", purpose.as_str())
                .with("_sid", session_id.as_str());

            match LogoutPolicy::classify(self.auth_request("logout", &params).await) {
                Attempt::Success(_) => {
                    log::info!("Logged out of {purpose} (auth API v{version})");
                    if self
                        .current_session
                        .as_ref()
                        .is_some_and(|s| s.id == session_id)
                    {
                        self.current_session = None;
                    }
                    return Ok(());
                }
                Attempt::Terminal(e) => {
                    log::warn!("Logout stopped at v{version}: {e}");
                    last_error = Some(e);
                    break;
                }
                Attempt::Retryable(e) => {
                    log::warn!("Logout via v{version} failed, trying next version: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(SynologyError::AllVersionsFailed))
    }

    /// Log out the cached session.
    pub async fn logout(&mut self) -> Result<()> {
        self.terminate(None, None).await
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_session.is_some()
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current_session.as_ref()
    }

    pub fn session_info(&self) -> SessionInfo {
        SessionInfo {
            session_id: self
                .current_session
                .as_ref()
                .map(|s| s.id.as_str().to_string()),
            session_type: self
                .current_session
                .as_ref()
                .map(|s| s.purpose.clone())
                .unwrap_or_default(),
            logged_in: self.is_logged_in(),
        }
    }

    /// DNS Server client bound to the cached session.
    pub fn dns_server(&self) -> Result<DnsServerClient> {
        let session = self.current_session.as_ref().ok_or(SynologyError::NoSession)?;
        Ok(DnsServerClient::new(WebApiClient::new(
            self.transport(),
            &self.config,
            session.id.clone(),
        )))
    }

    async fn auth_request(&self, method: &str, params: &ApiParams) -> Result<Value> {
        let url = self.config.auth_url();
        send_api_request(self.transport.as_ref(), Verb::Get, &url, params)
            .await?
            .into_result(AUTH_API, method, ErrorCategory::from_auth_code)
    }
}

fn extract_session_id(data: &Value) -> Result<SessionId> {
    let sid = data
        .get("sid")
        .and_then(Value::as_str)
        .ok_or_else(|| SynologyError::ParseError {
            detail: "login response is missing data.sid".to_string(),
        })?;
    SessionId::new(sid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_sid() {
        let id = extract_session_id(&json!({"sid": "abc", "did": "x"})).unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn missing_or_empty_sid_is_an_error() {
        assert!(matches!(
            extract_session_id(&json!({})),
            Err(SynologyError::ParseError { .. })
        ));
        assert!(matches!(
            extract_session_id(&json!({"sid": ""})),
            Err(SynologyError::InvalidParameter { .. })
        ));
    }
}
