//! Presence Context - Activity 负载

use serde::Serialize;

use crate::domain::track::TrackInfo;

/// 默认 activity 名称
pub const DEFAULT_ACTIVITY_NAME: &str = "Navidrome";

/// 专辑封面右下角的小图标
pub const NAVIDROME_LOGO_URL: &str =
    "https://cdn.jsdelivr.net/gh/homarr-labs/dashboard-icons/webp/navidrome.webp";

/// Activity 类型: Listening
pub const ACTIVITY_TYPE_LISTENING: u8 = 2;

/// 状态栏显示 details 字段
pub const STATUS_DISPLAY_TYPE_DETAILS: u8 = 2;

/// Activity 名称显示模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityNameMode {
    #[default]
    Default,
    Track,
    Artist,
    Album,
}

impl ActivityNameMode {
    /// 解析配置值，未识别或缺失时回退到 Default
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some("Track") => Self::Track,
            Some("Artist") => Self::Artist,
            Some("Album") => Self::Album,
            _ => Self::Default,
        }
    }

    pub fn resolve(&self, track: &TrackInfo) -> String {
        match self {
            Self::Default => DEFAULT_ACTIVITY_NAME.to_string(),
            Self::Track => track.title.clone(),
            Self::Artist => track.artist.clone(),
            Self::Album => track.album.clone(),
        }
    }
}

/// 小图标（图片, 说明），关闭时两者都为 None
pub fn small_overlay(show_logo: bool) -> (Option<String>, Option<String>) {
    if show_logo {
        (
            Some(NAVIDROME_LOGO_URL.to_string()),
            Some(DEFAULT_ACTIVITY_NAME.to_string()),
        )
    } else {
        (None, None)
    }
}

/// 时间戳（毫秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityTimestamps {
    pub start: i64,
    pub end: i64,
}

/// 图片资源
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityAssets {
    pub large_image: String,
    pub large_text: String,
    pub large_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

/// 出站 presence 文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityPayload {
    pub application_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: u8,
    pub details: String,
    pub details_url: String,
    pub state: String,
    pub state_url: String,
    pub status_display_type: u8,
    pub timestamps: ActivityTimestamps,
    pub assets: ActivityAssets,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackInfo {
        TrackInfo::new("Karma Police", "Radiohead", "OK Computer")
    }

    #[test]
    fn test_activity_name_modes() {
        let track = track();
        assert_eq!(ActivityNameMode::from_option(None).resolve(&track), "Navidrome");
        assert_eq!(ActivityNameMode::from_option(Some("Track")).resolve(&track), "Karma Police");
        assert_eq!(ActivityNameMode::from_option(Some("Artist")).resolve(&track), "Radiohead");
        assert_eq!(ActivityNameMode::from_option(Some("Album")).resolve(&track), "OK Computer");
    }

    #[test]
    fn test_unrecognized_mode_falls_back() {
        assert_eq!(ActivityNameMode::from_option(Some("track")), ActivityNameMode::Default);
        assert_eq!(ActivityNameMode::from_option(Some("")), ActivityNameMode::Default);
    }

    #[test]
    fn test_payload_serialization_shape() {
        let payload = ActivityPayload {
            application_id: "123".to_string(),
            name: "Navidrome".to_string(),
            activity_type: ACTIVITY_TYPE_LISTENING,
            details: "Karma Police".to_string(),
            details_url: String::new(),
            state: "Radiohead".to_string(),
            state_url: String::new(),
            status_display_type: STATUS_DISPLAY_TYPE_DETAILS,
            timestamps: ActivityTimestamps { start: 1000, end: 2000 },
            assets: ActivityAssets {
                large_image: "img".to_string(),
                large_text: "OK Computer".to_string(),
                large_url: "url".to_string(),
                small_image: None,
                small_text: None,
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], 2);
        assert_eq!(value["timestamps"]["start"], 1000);
        assert_eq!(value["assets"]["large_text"], "OK Computer");
        assert!(value["assets"].get("small_image").is_none());
    }

    #[test]
    fn test_small_overlay_toggle() {
        let (image, text) = small_overlay(true);
        assert_eq!(image.as_deref(), Some(NAVIDROME_LOGO_URL));
        assert_eq!(text.as_deref(), Some("Navidrome"));

        assert_eq!(small_overlay(false), (None, None));
    }
}
