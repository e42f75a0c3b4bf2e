//! Spotify Context - Spotify 链接限界上下文
//!
//! 职责:
//! - 直达链接 / 搜索链接构造
//! - 解析结果的缓存 key 与 TTL 策略

mod cache_key;
mod url;

pub use cache_key::{derive_cache_key, CACHE_KEY_PREFIX};
pub use url::{
    build_search_url, search_term_url, ResolvedUrl, CACHE_TTL_DIRECT_SECS, CACHE_TTL_SEARCH_SECS,
    SPOTIFY_SEARCH_ROOT, SPOTIFY_TRACK_ROOT,
};
