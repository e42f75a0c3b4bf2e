//! Callback Handlers - 调度回调分发

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::capabilities::SchedulerCallbackCapability;
use crate::application::commands::SchedulerCallbackCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{PresenceTransportPort, SessionRegistryPort};
use crate::domain::{CallbackKind, CallbackPayload};

/// Callback Router
///
/// 按载荷类型把回调分发给心跳或清除处理
pub struct CallbackRouter {
    transport: Arc<dyn PresenceTransportPort>,
    sessions: Arc<dyn SessionRegistryPort>,
}

impl CallbackRouter {
    pub fn new(
        transport: Arc<dyn PresenceTransportPort>,
        sessions: Arc<dyn SessionRegistryPort>,
    ) -> Self {
        Self {
            transport,
            sessions,
        }
    }

    /// 心跳失败时关闭会话，下一次播放会重新连接
    async fn handle_heartbeat(&self, username: &str) -> Result<(), ApplicationError> {
        if let Err(e) = self.transport.heartbeat(username).await {
            tracing::warn!(username = %username, error = %e, "Heartbeat failed, closing session");
            let _ = self.sessions.close(username);
            return Err(e.into());
        }

        self.sessions.touch(username);
        Ok(())
    }

    async fn handle_clear_activity(&self, username: &str) -> Result<(), ApplicationError> {
        self.transport.clear_activity(username).await?;

        tracing::info!(username = %username, "Presence cleared");
        Ok(())
    }
}

#[async_trait]
impl SchedulerCallbackCapability for CallbackRouter {
    async fn on_callback(&self, cmd: SchedulerCallbackCommand) -> Result<(), ApplicationError> {
        tracing::debug!(
            schedule_id = %cmd.schedule_id,
            payload = %cmd.payload,
            recurring = cmd.is_recurring,
            "Scheduler callback"
        );

        let Some(callback) = CallbackPayload::decode(&cmd.payload, &cmd.schedule_id) else {
            tracing::warn!(
                schedule_id = %cmd.schedule_id,
                payload = %cmd.payload,
                "Unknown scheduler callback payload"
            );
            return Ok(());
        };

        match callback.kind {
            CallbackKind::Heartbeat => self.handle_heartbeat(&callback.username).await,
            CallbackKind::ClearActivity => self.handle_clear_activity(&callback.username).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::testing::{FakeTransport, TransportCall};
    use crate::application::ports::UserSession;
    use crate::infrastructure::memory::InMemorySessionRegistry;

    fn router(transport: FakeTransport) -> (Arc<FakeTransport>, Arc<InMemorySessionRegistry>, CallbackRouter) {
        let transport = Arc::new(transport);
        let sessions = Arc::new(InMemorySessionRegistry::new());
        let router = CallbackRouter::new(transport.clone(), sessions.clone());
        (transport, sessions, router)
    }

    fn callback(schedule_id: &str, payload: &str) -> SchedulerCallbackCommand {
        SchedulerCallbackCommand {
            schedule_id: schedule_id.to_string(),
            payload: payload.to_string(),
            is_recurring: false,
        }
    }

    #[tokio::test]
    async fn test_bare_heartbeat_uses_schedule_id() {
        let (transport, _, router) = router(FakeTransport::new());

        router.on_callback(callback("alice", "heartbeat")).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![TransportCall::Heartbeat {
                username: "alice".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_bare_clear_strips_suffix() {
        let (transport, _, router) = router(FakeTransport::new());

        router
            .on_callback(callback("alice-clear", "clear-activity"))
            .await
            .unwrap();

        assert_eq!(
            transport.calls(),
            vec![TransportCall::Clear {
                username: "alice".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_structured_payload_wins_over_schedule_id() {
        let (transport, _, router) = router(FakeTransport::new());
        let payload = CallbackPayload::clear_activity("bob-clear-fan").encode();

        router
            .on_callback(callback("bob-clear-fan-clear", &payload))
            .await
            .unwrap();

        assert_eq!(
            transport.calls(),
            vec![TransportCall::Clear {
                username: "bob-clear-fan".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_unknown_payload_is_ignored() {
        let (transport, _, router) = router(FakeTransport::new());

        let result = router.on_callback(callback("alice", "reticulate")).await;

        assert!(result.is_ok());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_heartbeat_failure_closes_session() {
        let (_, sessions, router) = router(FakeTransport {
            fail_heartbeat: true,
            ..Default::default()
        });
        sessions.open(UserSession::new("alice", "tok"));

        let result = router.on_callback(callback("alice", "heartbeat")).await;

        assert!(result.is_err());
        assert!(sessions.get("alice").is_none());
    }

    #[tokio::test]
    async fn test_clear_failure_propagates() {
        let (_, _, router) = router(FakeTransport {
            fail_clear: true,
            ..Default::default()
        });

        let result = router
            .on_callback(callback("alice-clear", "clear-activity"))
            .await;

        assert!(result.is_err());
    }
}
