//! Spotify Queries - URL 解析查询

use crate::domain::TrackInfo;

/// 解析曲目的 Spotify URL
#[derive(Debug, Clone)]
pub struct ResolveSpotifyUrlQuery {
    pub track: TrackInfo,
}

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSpotifyUrlResponse {
    pub url: String,
    /// `direct` 或 `search`
    pub kind: &'static str,
}
