//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use synology_dns_client::{
    HttpRequest, HttpResponse, HttpTransport, Result, SessionNegotiator, SynologyConfig,
    SynologyError,
};
use tokio::sync::Mutex;

pub const BASE_URL: &str = "https://nas.test:5001";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// Scripted transport: replays queued responses in order and records every
/// request it receives.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub async fn push_json(&self, body: Value) {
        self.push_status(200, body.to_string()).await;
    }

    pub async fn push_status(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .await
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub async fn push_error(&self, error: SynologyError) {
        self.responses.lock().await.push_back(Err(error));
    }

    pub async fn push_network_error(&self) {
        self.push_error(SynologyError::NetworkError {
            detail: "connection refused".to_string(),
        })
        .await;
    }

    pub async fn push_success(&self, data: Value) {
        self.push_json(json!({"success": true, "data": data})).await;
    }

    pub async fn push_failure(&self, code: i64) {
        self.push_json(json!({"success": false, "error": {"code": code}}))
            .await;
    }

    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn last_request(&self) -> HttpRequest {
        let requests = self.requests.lock().await;
        assert!(!requests.is_empty(), "no request was sent");
        requests[requests.len() - 1].clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(SynologyError::NetworkError {
                    detail: "no scripted response left".to_string(),
                })
            })
    }
}

pub fn test_config() -> SynologyConfig {
    SynologyConfig::new(BASE_URL).expect("valid test config")
}

pub fn negotiator_with(transport: &Arc<MockTransport>) -> SessionNegotiator {
    SessionNegotiator::with_transport(test_config(), Arc::clone(transport) as Arc<dyn HttpTransport>)
}

/// Value of `key` in `request`, panicking with context when absent.
pub fn param<'a>(request: &'a HttpRequest, key: &str) -> &'a str {
    request
        .param(key)
        .unwrap_or_else(|| panic!("missing parameter '{key}' in {request:?}"))
}
