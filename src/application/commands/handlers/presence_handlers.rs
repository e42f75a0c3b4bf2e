//! Presence Handlers - 播放事件 → presence 生命周期

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::capabilities::{ScrobblerCapability, TransportEventCapability};
use crate::application::commands::{
    IsAuthorizedCommand, NowPlayingCommand, NowPlayingResponse, ScrobbleCommand,
    TransportClosedCommand,
};
use crate::application::error::ApplicationError;
use crate::application::plugin_settings::PluginSettings;
use crate::application::ports::{
    ArtworkResolverPort, ConfigSourcePort, PresenceTransportPort, SchedulerPort,
    SessionRegistryPort, UserSession,
};
use crate::application::queries::handlers::SpotifyUrlResolver;
use crate::domain::{
    clear_delay_secs, clear_schedule_id, search_term_url, small_overlay, ActivityAssets,
    ActivityPayload, ActivityTimestamps, CallbackPayload, PresenceWindow,
    ACTIVITY_TYPE_LISTENING, STATUS_DISPLAY_TYPE_DETAILS,
};

/// Presence Orchestrator
///
/// 授权检查、时间窗口计算、构造 activity、发送，并调度曲目结束后的自动清除
pub struct PresenceOrchestrator {
    config_source: Arc<dyn ConfigSourcePort>,
    sessions: Arc<dyn SessionRegistryPort>,
    transport: Arc<dyn PresenceTransportPort>,
    scheduler: Arc<dyn SchedulerPort>,
    artwork: Arc<dyn ArtworkResolverPort>,
    resolver: Arc<SpotifyUrlResolver>,
}

impl PresenceOrchestrator {
    pub fn new(
        config_source: Arc<dyn ConfigSourcePort>,
        sessions: Arc<dyn SessionRegistryPort>,
        transport: Arc<dyn PresenceTransportPort>,
        scheduler: Arc<dyn SchedulerPort>,
        artwork: Arc<dyn ArtworkResolverPort>,
        resolver: Arc<SpotifyUrlResolver>,
    ) -> Self {
        Self {
            config_source,
            sessions,
            transport,
            scheduler,
            artwork,
            resolver,
        }
    }

    /// 同一 token 的会话直接复用，否则（重新）连接
    async fn ensure_connected(&self, username: &str, token: &str) -> Result<(), ApplicationError> {
        if self.sessions.is_open_with(username, token) {
            self.sessions.touch(username);
            return Ok(());
        }

        self.transport.connect(username, token).await.map_err(|e| {
            ApplicationError::retry_later(format!("failed to connect presence transport: {}", e))
        })?;
        self.sessions.open(UserSession::new(username, token));

        tracing::info!(username = %username, "Presence session connected");
        Ok(())
    }

    async fn cancel_best_effort(&self, schedule_id: &str) {
        if let Err(e) = self.scheduler.cancel_schedule(schedule_id).await {
            tracing::debug!(schedule_id = %schedule_id, error = %e, "No schedule to cancel");
        }
    }
}

#[async_trait]
impl ScrobblerCapability for PresenceOrchestrator {
    async fn is_authorized(&self, cmd: IsAuthorizedCommand) -> Result<bool, ApplicationError> {
        let settings = PluginSettings::load(self.config_source.as_ref())?;
        let authorized = settings.is_authorized(&cmd.username);

        tracing::info!(username = %cmd.username, authorized, "Authorization checked");
        Ok(authorized)
    }

    async fn now_playing(
        &self,
        cmd: NowPlayingCommand,
    ) -> Result<NowPlayingResponse, ApplicationError> {
        tracing::info!(
            username = %cmd.username,
            track = %cmd.track.title,
            position = cmd.position,
            "Setting presence"
        );

        let settings = PluginSettings::load(self.config_source.as_ref())?;
        let token = settings
            .token_for(&cmd.username)
            .ok_or_else(|| ApplicationError::not_authorized(&cmd.username))?
            .to_string();

        self.ensure_connected(&cmd.username, &token).await?;

        let clear_id = clear_schedule_id(&cmd.username);
        self.cancel_best_effort(&clear_id).await;

        let track = &cmd.track;
        let duration = track.duration_secs();
        let window = PresenceWindow::anchored(Utc::now().timestamp(), cmd.position, duration);

        let large_url = self.resolver.resolve(track).await.into_string();
        let large_image = self.artwork.image_url(&cmd.username, &track.id).await;
        let (small_image, small_text) = small_overlay(settings.show_logo_overlay);

        let activity = ActivityPayload {
            application_id: settings.client_id.clone(),
            name: settings.activity_name.resolve(track),
            activity_type: ACTIVITY_TYPE_LISTENING,
            details: track.title.clone(),
            details_url: search_term_url(&track.title),
            state: track.artist.clone(),
            state_url: search_term_url(&track.artist),
            status_display_type: STATUS_DISPLAY_TYPE_DETAILS,
            timestamps: ActivityTimestamps {
                start: window.start_ms,
                end: window.end_ms,
            },
            assets: ActivityAssets {
                large_image,
                large_text: track.album.clone(),
                large_url: large_url.clone(),
                small_image,
                small_text,
            },
        };

        self.transport
            .send_activity(&settings.client_id, &cmd.username, &token, &activity)
            .await
            .map_err(|e| ApplicationError::retry_later(format!("failed to send activity: {}", e)))?;

        let clear_in_secs = clear_delay_secs(duration, cmd.position);
        let payload = CallbackPayload::clear_activity(&cmd.username).encode();
        if let Err(e) = self
            .scheduler
            .schedule_one_time(clear_in_secs, &payload, &clear_id)
            .await
        {
            tracing::warn!(
                username = %cmd.username,
                error = %e,
                "Failed to schedule presence clear"
            );
        }

        Ok(NowPlayingResponse {
            username: cmd.username,
            start_ms: window.start_ms,
            end_ms: window.end_ms,
            clear_in_secs,
            large_url,
        })
    }

    async fn scrobble(&self, cmd: ScrobbleCommand) -> Result<(), ApplicationError> {
        tracing::debug!(username = %cmd.username, track = %cmd.track.title, "Scrobble ignored");
        Ok(())
    }
}

#[async_trait]
impl TransportEventCapability for PresenceOrchestrator {
    async fn on_transport_closed(
        &self,
        cmd: TransportClosedCommand,
    ) -> Result<(), ApplicationError> {
        match self.sessions.close(&cmd.username) {
            Ok(_) => tracing::info!(username = %cmd.username, "Presence session closed"),
            Err(e) => tracing::debug!(username = %cmd.username, error = %e, "Session already closed"),
        }

        // 心跳调度以用户名为 id
        self.cancel_best_effort(&cmd.username).await;
        self.cancel_best_effort(&clear_schedule_id(&cmd.username)).await;
        Ok(())
    }
}
