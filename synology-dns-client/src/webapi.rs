//! Versioned resource calls against `entry.cgi`.

use std::sync::Arc;

use serde_json::Value;

use crate::config::SynologyConfig;
use crate::error::{ErrorCategory, Result};
use crate::http_client::{HttpRequest, HttpTransport, HttpUtils};
use crate::types::{ApiParams, ApiResponse, SessionId, Verb};

/// Send one encoded request and decode the API envelope.
///
/// Non-2xx statuses become [`SynologyError::HttpStatus`](crate::SynologyError::HttpStatus).
pub(crate) async fn send_api_request(
    transport: &dyn HttpTransport,
    verb: Verb,
    url: &str,
    params: &ApiParams,
) -> Result<ApiResponse> {
    let request = HttpRequest {
        verb,
        url: url.to_string(),
        params: params.encode(),
    };
    let response = HttpUtils::ensure_success(transport.send(request).await?)?;
    HttpUtils::parse_json(&response.body)
}

/// Issues method calls against named APIs on behalf of one session.
///
/// No retries and no version fallback happen here: one call is one request
/// with exactly the version the caller asked for.
#[derive(Clone)]
pub struct WebApiClient {
    transport: Arc<dyn HttpTransport>,
    entry_url: String,
    session_id: SessionId,
}

impl WebApiClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: &SynologyConfig,
        session_id: SessionId,
    ) -> Self {
        Self {
            transport,
            entry_url: config.entry_url(),
            session_id,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Call `api.method` at `version`, returning the `data` payload.
    ///
    /// `api`, `version`, `method` and `_sid` (the session ID) always take the
    /// values given here, whatever `params` holds. A `success=false` envelope becomes
    /// [`SynologyError::Api`](crate::SynologyError::Api) with the remote code
    /// and details unmodified.
    pub async fn call(
        &self,
        api: &str,
        version: u32,
        method: &str,
        verb: Verb,
        params: ApiParams,
    ) -> Result<Value> {
        let mut request_params = ApiParams::new()
            .with("api", api)
            .with("version", version)
            .with("method", method);
        request_params.extend(params);
        // identity and session always win over caller params
        request_params.insert("api", api);
        request_params.insert("version", version);
        request_params.insert("method", method);
        request_params.insert("_sid", self.session_id.as_str());

        log::debug!("{api}.{method} v{version}");

        let response =
            send_api_request(self.transport.as_ref(), verb, &self.entry_url, &request_params)
                .await?;
        let result = response.into_result(api, method, ErrorCategory::from_common_code);
        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("{e}");
            } else {
                log::error!("{e}");
            }
        }
        result
    }
}
