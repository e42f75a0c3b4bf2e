//! Logging Presence Transport - 只记录，不连接任何网关

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{PresenceTransportPort, TransportError};
use crate::domain::ActivityPayload;

/// 日志 transport
///
/// 记录每个用户最近一次 activity，未连接的用户调用心跳/清除返回 NotConnected
pub struct LoggingPresenceTransport {
    connected: DashMap<String, ()>,
    activities: DashMap<String, ActivityPayload>,
}

impl LoggingPresenceTransport {
    pub fn new() -> Self {
        Self {
            connected: DashMap::new(),
            activities: DashMap::new(),
        }
    }

    pub fn current_activity(&self, username: &str) -> Option<ActivityPayload> {
        self.activities.get(username).map(|a| a.clone())
    }

    pub fn is_connected(&self, username: &str) -> bool {
        self.connected.contains_key(username)
    }

    fn ensure_connected(&self, username: &str) -> Result<(), TransportError> {
        if self.connected.contains_key(username) {
            Ok(())
        } else {
            Err(TransportError::NotConnected(username.to_string()))
        }
    }
}

impl Default for LoggingPresenceTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresenceTransportPort for LoggingPresenceTransport {
    async fn connect(&self, username: &str, _token: &str) -> Result<(), TransportError> {
        self.connected.insert(username.to_string(), ());
        tracing::info!(username = %username, "Presence connect");
        Ok(())
    }

    async fn send_activity(
        &self,
        client_id: &str,
        username: &str,
        _token: &str,
        activity: &ActivityPayload,
    ) -> Result<(), TransportError> {
        self.ensure_connected(username)?;
        tracing::info!(
            username = %username,
            client_id = %client_id,
            name = %activity.name,
            details = %activity.details,
            state = %activity.state,
            start = activity.timestamps.start,
            end = activity.timestamps.end,
            large_url = %activity.assets.large_url,
            "Presence activity"
        );
        self.activities.insert(username.to_string(), activity.clone());
        Ok(())
    }

    async fn heartbeat(&self, username: &str) -> Result<(), TransportError> {
        self.ensure_connected(username)?;
        tracing::debug!(username = %username, "Presence heartbeat");
        Ok(())
    }

    async fn clear_activity(&self, username: &str) -> Result<(), TransportError> {
        self.ensure_connected(username)?;
        self.activities.remove(username);
        tracing::info!(username = %username, "Presence cleared");
        Ok(())
    }
}
