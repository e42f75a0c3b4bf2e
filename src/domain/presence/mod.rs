//! Presence Context - 状态限界上下文
//!
//! 职责:
//! - 出站 activity 负载
//! - 进度条时间窗口与自动清除延迟
//! - 调度回调载荷（类型 + 用户名）

mod activity;
mod callback;
mod timing;

pub use activity::{
    small_overlay, ActivityAssets, ActivityNameMode, ActivityPayload, ActivityTimestamps,
    ACTIVITY_TYPE_LISTENING, DEFAULT_ACTIVITY_NAME, NAVIDROME_LOGO_URL,
    STATUS_DISPLAY_TYPE_DETAILS,
};
pub use callback::{
    clear_schedule_id, CallbackKind, CallbackPayload, CLEAR_ACTIVITY_TAG, CLEAR_SCHEDULE_SUFFIX,
    HEARTBEAT_TAG,
};
pub use timing::{clear_delay_secs, PresenceWindow, CLEAR_GRACE_SECS};
