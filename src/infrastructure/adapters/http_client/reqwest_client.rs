//! Reqwest HTTP Client - 出站 HTTP 请求
//!
//! 实现 HttpClientPort trait，所有外部服务调用都经过这里

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{HttpClientError, HttpClientPort, HttpRequest, HttpResponse};

/// HTTP 客户端配置
#[derive(Debug, Clone)]
pub struct ReqwestHttpClientConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ReqwestHttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ReqwestHttpClientConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Reqwest HTTP 客户端
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(config: ReqwestHttpClientConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| HttpClientError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttpClient {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        tracing::debug!(url = %request.url, body_len = request.body.len(), "Sending HTTP POST");

        let response = builder.body(request.body).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpClientError::Timeout
            } else if e.is_builder() {
                HttpClientError::InvalidRequest(e.to_string())
            } else {
                HttpClientError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::NetworkError(format!("Failed to read body: {}", e)))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}
