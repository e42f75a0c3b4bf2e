//! Spotify Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ResolveSpotifyUrlQuery;
use crate::infrastructure::http::dto::{
    ApiResponse, ResolveSpotifyUrlRequest, ResolveSpotifyUrlResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn resolve_spotify_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResolveSpotifyUrlRequest>,
) -> Result<Json<ApiResponse<ResolveSpotifyUrlResponseDto>>, ApiError> {
    let result = state
        .spotify_resolver
        .handle(ResolveSpotifyUrlQuery { track: req.track })
        .await?;

    Ok(Json(ApiResponse::success(ResolveSpotifyUrlResponseDto {
        url: result.url,
        kind: result.kind,
    })))
}
