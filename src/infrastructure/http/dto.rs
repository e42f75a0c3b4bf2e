//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::TrackInfo;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Scrobbler DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct IsAuthorizedRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct IsAuthorizedResponse {
    pub authorized: bool,
}

#[derive(Debug, Deserialize)]
pub struct NowPlayingRequest {
    pub username: String,
    pub track: TrackInfo,
    /// 播放进度（秒）
    #[serde(default)]
    pub position: i64,
}

#[derive(Debug, Serialize)]
pub struct NowPlayingResponseDto {
    pub start_ms: i64,
    pub end_ms: i64,
    pub clear_in_secs: i64,
    pub spotify_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrobbleRequest {
    pub username: String,
    pub track: TrackInfo,
    #[serde(default)]
    pub timestamp: i64,
}

// ============================================================================
// Scheduler / Transport DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SchedulerCallbackRequest {
    pub schedule_id: String,
    pub payload: String,
    #[serde(default)]
    pub is_recurring: bool,
}

#[derive(Debug, Deserialize)]
pub struct TransportClosedRequest {
    pub username: String,
}

// ============================================================================
// Spotify DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ResolveSpotifyUrlRequest {
    pub track: TrackInfo,
}

#[derive(Debug, Serialize)]
pub struct ResolveSpotifyUrlResponseDto {
    pub url: String,
    pub kind: &'static str,
}
