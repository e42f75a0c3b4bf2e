//! Application State
//!
//! HTTP handler 只依赖能力 trait 与 Spotify 解析器

use std::sync::Arc;

use crate::application::{
    SchedulerCallbackCapability, ScrobblerCapability, SpotifyUrlResolver,
    TransportEventCapability,
};

/// 应用状态
pub struct AppState {
    pub scrobbler: Arc<dyn ScrobblerCapability>,
    pub scheduler_callbacks: Arc<dyn SchedulerCallbackCapability>,
    pub transport_events: Arc<dyn TransportEventCapability>,
    pub spotify_resolver: Arc<SpotifyUrlResolver>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        scrobbler: Arc<dyn ScrobblerCapability>,
        scheduler_callbacks: Arc<dyn SchedulerCallbackCapability>,
        transport_events: Arc<dyn TransportEventCapability>,
        spotify_resolver: Arc<SpotifyUrlResolver>,
    ) -> Self {
        Self {
            scrobbler,
            scheduler_callbacks,
            transport_events,
            spotify_resolver,
        }
    }
}
