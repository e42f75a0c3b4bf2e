//! Presence Context - 调度回调载荷
//!
//! 本服务调度的回调携带结构化 JSON 载荷；
//! transport 侧调度的心跳只携带裸标签，用户名由 schedule id 推出

use serde::{Deserialize, Serialize};

pub const HEARTBEAT_TAG: &str = "heartbeat";
pub const CLEAR_ACTIVITY_TAG: &str = "clear-activity";
pub const CLEAR_SCHEDULE_SUFFIX: &str = "-clear";

/// 回调类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallbackKind {
    Heartbeat,
    ClearActivity,
}

impl CallbackKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Heartbeat => HEARTBEAT_TAG,
            Self::ClearActivity => CLEAR_ACTIVITY_TAG,
        }
    }
}

/// 回调载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub kind: CallbackKind,
    pub username: String,
}

impl CallbackPayload {
    pub fn heartbeat(username: impl Into<String>) -> Self {
        Self {
            kind: CallbackKind::Heartbeat,
            username: username.into(),
        }
    }

    pub fn clear_activity(username: impl Into<String>) -> Self {
        Self {
            kind: CallbackKind::ClearActivity,
            username: username.into(),
        }
    }

    /// 编码为调度器载荷字符串
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.kind.tag().to_string())
    }

    /// 解码调度器回调
    ///
    /// 优先解析结构化载荷；否则按裸标签处理:
    /// - `heartbeat`: schedule id 即用户名
    /// - `clear-activity`: schedule id 去掉 `-clear` 后缀即用户名
    ///
    /// 未知标签返回 None
    pub fn decode(payload: &str, schedule_id: &str) -> Option<Self> {
        if let Ok(parsed) = serde_json::from_str::<Self>(payload) {
            return Some(parsed);
        }

        match payload {
            HEARTBEAT_TAG => Some(Self::heartbeat(schedule_id)),
            CLEAR_ACTIVITY_TAG => Some(Self::clear_activity(
                schedule_id
                    .strip_suffix(CLEAR_SCHEDULE_SUFFIX)
                    .unwrap_or(schedule_id),
            )),
            _ => None,
        }
    }
}

/// 自动清除的 schedule id: `<username>-clear`
pub fn clear_schedule_id(username: &str) -> String {
    format!("{}{}", username, CLEAR_SCHEDULE_SUFFIX)
}
