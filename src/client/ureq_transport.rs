//! 基于 ureq 的 HTTP 传输实现
//!
//! ureq 是同步客户端，请求在 `spawn_blocking` 中执行

use std::time::Duration;

use async_trait::async_trait;
use tracing::{trace, warn};
use ureq::{Agent, RequestBuilder};

use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::errors::{AdminError, Result};

#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        // 非 2xx 状态码交给 ApiClient 统一处理
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    pub fn from_config() -> Self {
        let timeout = crate::config::get_config().api.timeout_secs;
        Self::new(Duration::from_secs(timeout))
    }

    fn with_headers<B>(mut builder: RequestBuilder<B>, request: &ApiRequest) -> RequestBuilder<B> {
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    /// 同步发送（在 spawn_blocking 中调用）
    fn send_sync(agent: Agent, request: ApiRequest) -> Result<ApiResponse> {
        trace!("{} {}", request.method, request.url);
        let body = request.body.clone().unwrap_or_default();
        let result = match request.method {
            Method::Get => Self::with_headers(agent.get(&request.url), &request).call(),
            Method::Delete => Self::with_headers(agent.delete(&request.url), &request).call(),
            Method::Post => Self::with_headers(agent.post(&request.url), &request).send(&body[..]),
            Method::Put => Self::with_headers(agent.put(&request.url), &request).send(&body[..]),
        };

        let response = result.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.url, e);
            AdminError::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|e| AdminError::transport(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || Self::send_sync(agent, request))
            .await
            .map_err(|e| AdminError::transport(format!("HTTP worker failed: {}", e)))?
    }
}
