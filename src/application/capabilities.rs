//! Capabilities - 宿主可调用的能力
//!
//! HTTP 层与回调 worker 只依赖这些 trait，不关心具体 handler

use async_trait::async_trait;

use crate::application::commands::{
    IsAuthorizedCommand, NowPlayingCommand, NowPlayingResponse, SchedulerCallbackCommand,
    ScrobbleCommand, TransportClosedCommand,
};
use crate::application::error::ApplicationError;

/// Scrobbler 能力
#[async_trait]
pub trait ScrobblerCapability: Send + Sync {
    async fn is_authorized(&self, cmd: IsAuthorizedCommand) -> Result<bool, ApplicationError>;

    async fn now_playing(
        &self,
        cmd: NowPlayingCommand,
    ) -> Result<NowPlayingResponse, ApplicationError>;

    async fn scrobble(&self, cmd: ScrobbleCommand) -> Result<(), ApplicationError>;
}

/// 调度回调能力
#[async_trait]
pub trait SchedulerCallbackCapability: Send + Sync {
    async fn on_callback(&self, cmd: SchedulerCallbackCommand) -> Result<(), ApplicationError>;
}

/// Transport 事件能力
#[async_trait]
pub trait TransportEventCapability: Send + Sync {
    async fn on_transport_closed(&self, cmd: TransportClosedCommand)
        -> Result<(), ApplicationError>;
}
