//! HTTP transport
//!
//! The negotiator and the resource clients never touch reqwest directly; they
//! hand an [`HttpRequest`] to an [`HttpTransport`]. [`ReqwestTransport`] is the
//! production implementation, tests substitute a scripted one.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::SynologyConfig;
use crate::error::{Result, SynologyError};
use crate::types::Verb;
use crate::utils::log_sanitizer::{format_params, truncate_for_log};

/// A fully encoded request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub verb: Verb,
    pub url: String,
    /// Query parameters for `GET`, form fields for `POST`.
    pub params: Vec<(String, String)>,
}

impl HttpRequest {
    /// First value of `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Black-box HTTP requester.
///
/// Implementations report connection-level failures as
/// [`SynologyError::NetworkError`] / [`SynologyError::Timeout`] and return
/// every received response, whatever its status.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client honoring the configured timeouts and certificate policy.
    pub fn new(config: &SynologyConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .build()
            .map_err(|e| SynologyError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = match request.verb {
            Verb::Get => self.client.get(&request.url).query(&request.params),
            Verb::Post => self.client.post(&request.url).form(&request.params),
        };
        HttpUtils::execute_request(builder, request.verb, &request.url, &request.params).await
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status and response text
    ///
    /// Unified processing: sending requests, logging, error handling
    pub async fn execute_request(
        request_builder: RequestBuilder,
        verb: Verb,
        url: &str,
        params: &[(String, String)],
    ) -> Result<HttpResponse> {
        log::debug!("{} {url} [{}]", verb.as_str(), format_params(params));

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SynologyError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                SynologyError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| SynologyError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse { status, body })
    }

    /// Reject non-2xx responses as [`SynologyError::HttpStatus`].
    pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse> {
        if (200..300).contains(&response.status) {
            Ok(response)
        } else {
            log::warn!("Unexpected HTTP status {}", response.status);
            Err(SynologyError::HttpStatus {
                status: response.status,
                body: truncate_for_log(&response.body),
            })
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            SynologyError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
