//! Scrobbler Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{IsAuthorizedCommand, NowPlayingCommand, ScrobbleCommand};
use crate::infrastructure::http::dto::{
    ApiResponse, Empty, IsAuthorizedRequest, IsAuthorizedResponse, NowPlayingRequest,
    NowPlayingResponseDto, ScrobbleRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn require_username(username: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::BadRequest("username is required".to_string()));
    }
    Ok(())
}

pub async fn is_authorized(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IsAuthorizedRequest>,
) -> Result<Json<ApiResponse<IsAuthorizedResponse>>, ApiError> {
    require_username(&req.username)?;

    let authorized = state
        .scrobbler
        .is_authorized(IsAuthorizedCommand {
            username: req.username,
        })
        .await?;

    Ok(Json(ApiResponse::success(IsAuthorizedResponse { authorized })))
}

pub async fn now_playing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NowPlayingRequest>,
) -> Result<Json<ApiResponse<NowPlayingResponseDto>>, ApiError> {
    require_username(&req.username)?;

    let cmd = NowPlayingCommand {
        username: req.username,
        track: req.track,
        position: req.position,
    };

    let result = state.scrobbler.now_playing(cmd).await?;

    Ok(Json(ApiResponse::success(NowPlayingResponseDto {
        start_ms: result.start_ms,
        end_ms: result.end_ms,
        clear_in_secs: result.clear_in_secs,
        spotify_url: result.large_url,
    })))
}

pub async fn scrobble(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrobbleRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .scrobbler
        .scrobble(ScrobbleCommand {
            username: req.username,
            track: req.track,
            timestamp: req.timestamp,
        })
        .await?;

    Ok(Json(ApiResponse::ok()))
}
