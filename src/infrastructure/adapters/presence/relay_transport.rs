//! HTTP Presence Relay - 把 presence 操作转发给外部网关
//!
//! 网关 API:
//! POST {relay_url}/connect    {"username", "token"}
//! POST {relay_url}/activity   {"client_id", "username", "token", "activity"}
//! POST {relay_url}/heartbeat  {"username"}
//! POST {relay_url}/clear      {"username"}

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::application::ports::{
    HttpClientPort, HttpRequest, HttpResponse, PresenceTransportPort, TransportError,
};
use crate::domain::ActivityPayload;

#[derive(Debug, Serialize)]
struct ConnectRequest<'a> {
    username: &'a str,
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct ActivityRequest<'a> {
    client_id: &'a str,
    username: &'a str,
    token: &'a str,
    activity: &'a ActivityPayload,
}

#[derive(Debug, Serialize)]
struct UserRequest<'a> {
    username: &'a str,
}

/// Relay 配置
#[derive(Debug, Clone)]
pub struct PresenceRelayConfig {
    pub relay_url: String,
}

impl Default for PresenceRelayConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://127.0.0.1:6464".to_string(),
        }
    }
}

/// HTTP Presence Relay
pub struct HttpPresenceRelay {
    http: Arc<dyn HttpClientPort>,
    config: PresenceRelayConfig,
}

impl HttpPresenceRelay {
    pub fn new(http: Arc<dyn HttpClientPort>, config: PresenceRelayConfig) -> Self {
        Self { http, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.relay_url.trim_end_matches('/'), path)
    }

    async fn send<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpResponse, TransportError> {
        let body = serde_json::to_vec(body).map_err(|e| TransportError::Rejected(e.to_string()))?;
        self.http
            .post(HttpRequest::post_json(self.url(path), body))
            .await
            .map_err(|e| TransportError::NetworkError(e.to_string()))
    }

    /// 非 2xx 映射为 transport 错误；404 表示网关上没有该用户的连接
    fn check(username: &str, response: HttpResponse) -> Result<(), TransportError> {
        match response.status {
            200..=299 => Ok(()),
            404 => Err(TransportError::NotConnected(username.to_string())),
            status => Err(TransportError::Rejected(format!(
                "HTTP {}: {}",
                status,
                response.body_text()
            ))),
        }
    }
}

#[async_trait]
impl PresenceTransportPort for HttpPresenceRelay {
    async fn connect(&self, username: &str, token: &str) -> Result<(), TransportError> {
        let response = self
            .send("connect", &ConnectRequest { username, token })
            .await
            .map_err(|e| TransportError::ConnectFailed(e.to_string()))?;

        if !response.is_success() {
            return Err(TransportError::ConnectFailed(format!(
                "HTTP {}: {}",
                response.status,
                response.body_text()
            )));
        }

        tracing::debug!(username = %username, "Relay connected");
        Ok(())
    }

    async fn send_activity(
        &self,
        client_id: &str,
        username: &str,
        token: &str,
        activity: &ActivityPayload,
    ) -> Result<(), TransportError> {
        let response = self
            .send(
                "activity",
                &ActivityRequest {
                    client_id,
                    username,
                    token,
                    activity,
                },
            )
            .await?;
        Self::check(username, response)
    }

    async fn heartbeat(&self, username: &str) -> Result<(), TransportError> {
        let response = self.send("heartbeat", &UserRequest { username }).await?;
        Self::check(username, response)
    }

    async fn clear_activity(&self, username: &str) -> Result<(), TransportError> {
        let response = self.send("clear", &UserRequest { username }).await?;
        Self::check(username, response)
    }
}
