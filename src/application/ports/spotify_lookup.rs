//! Spotify Lookup Port - recording → Spotify track ID 解析
//!
//! 查询失败不是错误：非 2xx、响应无法解析、没有可用 ID 都返回 None

use async_trait::async_trait;

/// Spotify Lookup Port
#[async_trait]
pub trait SpotifyLookupPort: Send + Sync {
    /// 通过 MusicBrainz recording ID 查找
    async fn lookup_by_recording_id(&self, mbid: &str) -> Option<String>;

    /// 通过 (artist, title, album) 元数据查找
    async fn lookup_by_metadata(&self, artist: &str, title: &str, album: &str) -> Option<String>;
}
