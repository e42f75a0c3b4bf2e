//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Track Context: 正在播放的曲目快照与艺人名解析
//! - Spotify Context: Spotify 链接构造与缓存 key
//! - Presence Context: 状态负载、时间窗口与调度回调载荷

pub mod presence;
pub mod spotify;
pub mod track;

pub use presence::{
    clear_delay_secs, clear_schedule_id, small_overlay, ActivityAssets, ActivityNameMode,
    ActivityPayload, ActivityTimestamps, CallbackKind, CallbackPayload, PresenceWindow,
    ACTIVITY_TYPE_LISTENING, NAVIDROME_LOGO_URL, STATUS_DISPLAY_TYPE_DETAILS,
};
pub use spotify::{
    build_search_url, derive_cache_key, search_term_url, ResolvedUrl, CACHE_TTL_DIRECT_SECS,
    CACHE_TTL_SEARCH_SECS,
};
pub use track::{parse_primary_artist, ArtistRef, TrackInfo};
