//! Track Context - Value Objects

use serde::{Deserialize, Serialize};

/// 结构化艺人引用
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl ArtistRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}

/// 正在播放的曲目快照
///
/// 由调用方（scrobble 事件源）持有，核心逻辑只读
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// 不透明的曲目 ID（用于封面查找）
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// 原始艺人字符串，可能包含 feat. / & 等合作艺人
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    /// 时长（秒）
    #[serde(default)]
    pub duration: f32,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    /// MusicBrainz recording ID
    #[serde(default)]
    pub mbz_recording_id: Option<String>,
}

impl TrackInfo {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_recording_id(mut self, mbid: impl Into<String>) -> Self {
        self.mbz_recording_id = Some(mbid.into());
        self
    }

    /// 非空的 recording ID；空字符串视为缺失
    pub fn recording_id(&self) -> Option<&str> {
        self.mbz_recording_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// 第一个结构化艺人的名称
    pub fn first_artist_name(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// 时长取整到秒
    pub fn duration_secs(&self) -> i64 {
        self.duration as i64
    }
}
