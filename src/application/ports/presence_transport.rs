//! Presence Transport Port - 状态网关连接
//!
//! 连接、心跳与负载传输由外部 transport 负责，这里只定义边界

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ActivityPayload;

/// Transport 错误
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connect failed: {0}")]
    ConnectFailed(String),

    #[error("Not connected: {0}")]
    NotConnected(String),

    #[error("Rejected by gateway: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Presence Transport Port
#[async_trait]
pub trait PresenceTransportPort: Send + Sync {
    /// 建立（或重建）用户连接
    async fn connect(&self, username: &str, token: &str) -> Result<(), TransportError>;

    /// 发送 activity
    async fn send_activity(
        &self,
        client_id: &str,
        username: &str,
        token: &str,
        activity: &ActivityPayload,
    ) -> Result<(), TransportError>;

    /// 心跳保活
    async fn heartbeat(&self, username: &str) -> Result<(), TransportError>;

    /// 清除 activity
    async fn clear_activity(&self, username: &str) -> Result<(), TransportError>;
}
