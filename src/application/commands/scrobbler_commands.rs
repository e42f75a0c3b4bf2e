//! Scrobbler Commands - 播放事件命令

use crate::domain::TrackInfo;

/// 查询用户是否已授权
#[derive(Debug, Clone)]
pub struct IsAuthorizedCommand {
    pub username: String,
}

/// 正在播放 - 更新 presence
#[derive(Debug, Clone)]
pub struct NowPlayingCommand {
    pub username: String,
    pub track: TrackInfo,
    /// 当前播放进度（秒）
    pub position: i64,
}

/// 正在播放响应
#[derive(Debug, Clone)]
pub struct NowPlayingResponse {
    pub username: String,
    pub start_ms: i64,
    pub end_ms: i64,
    pub clear_in_secs: i64,
    pub large_url: String,
}

/// 提交 scrobble
#[derive(Debug, Clone)]
pub struct ScrobbleCommand {
    pub username: String,
    pub track: TrackInfo,
    pub timestamp: i64,
}
