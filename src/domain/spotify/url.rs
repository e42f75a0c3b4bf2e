//! Spotify Context - 链接构造

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const SPOTIFY_SEARCH_ROOT: &str = "https://open.spotify.com/search/";
pub const SPOTIFY_TRACK_ROOT: &str = "https://open.spotify.com/track/";

/// 路径段转义集合
///
/// 与 Go `url.PathEscape` 一致: 非保留字符 `-_.~` 与 `$&+=:@` 保持原样，
/// 空格、`/`、`;`、`,`、`?` 及其余字符转义
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// 直达链接缓存 30 天
pub const CACHE_TTL_DIRECT_SECS: i64 = 30 * 24 * 60 * 60;

/// 搜索回退链接缓存 4 小时（元数据可能稍后才能被解析）
pub const CACHE_TTL_SEARCH_SECS: i64 = 4 * 60 * 60;

/// Spotify 解析结果
///
/// 对外仍然是一个 URL 字符串，内部区分来源以决定缓存 TTL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedUrl {
    /// `https://open.spotify.com/track/<id>`
    Direct(String),
    /// `https://open.spotify.com/search/<query>`
    SearchFallback(String),
}

impl ResolvedUrl {
    /// 根据 Spotify track ID 构造直达链接
    pub fn direct(track_id: &str) -> Self {
        Self::Direct(format!("{}{}", SPOTIFY_TRACK_ROOT, track_id))
    }

    /// 根据标题和原始艺人构造搜索链接
    pub fn search(title: &str, artist: &str) -> Self {
        Self::SearchFallback(build_search_url(title, artist))
    }

    /// 从缓存值还原，按前缀区分
    pub fn from_cached(url: String) -> Self {
        if url.starts_with(SPOTIFY_TRACK_ROOT) {
            Self::Direct(url)
        } else {
            Self::SearchFallback(url)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Direct(url) | Self::SearchFallback(url) => url,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Direct(url) | Self::SearchFallback(url) => url,
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Direct(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Direct(_) => "direct",
            Self::SearchFallback(_) => "search",
        }
    }

    /// 写回缓存时使用的 TTL（秒）
    pub fn cache_ttl_secs(&self) -> i64 {
        match self {
            Self::Direct(_) => CACHE_TTL_DIRECT_SECS,
            Self::SearchFallback(_) => CACHE_TTL_SEARCH_SECS,
        }
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 构造 "artist title" 的 Spotify 搜索链接
///
/// 两者都为空时返回搜索根路径
pub fn build_search_url(title: &str, artist: &str) -> String {
    let query = format!("{} {}", artist, title);
    let query = query.trim();
    if query.is_empty() {
        return SPOTIFY_SEARCH_ROOT.to_string();
    }
    format!("{}{}", SPOTIFY_SEARCH_ROOT, path_escape(query))
}

/// 单个搜索词的 Spotify 搜索链接，空词返回空字符串
pub fn search_term_url(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return String::new();
    }
    format!("{}{}", SPOTIFY_SEARCH_ROOT, path_escape(term))
}

fn path_escape(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
