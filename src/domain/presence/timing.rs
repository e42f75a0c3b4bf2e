//! Presence Context - 时间窗口

/// 曲目结束后再等待的秒数
pub const CLEAR_GRACE_SECS: i64 = 5;

/// 进度条时间窗口（毫秒时间戳）
///
/// 锚定到曲目实际开始的时刻，而不是发送更新的时刻
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl PresenceWindow {
    /// 宿主传入的进度与时长不可信，越界时饱和而不是溢出
    pub fn anchored(now_secs: i64, position_secs: i64, duration_secs: i64) -> Self {
        let start_ms = now_secs.saturating_sub(position_secs).saturating_mul(1000);
        Self {
            start_ms,
            end_ms: start_ms.saturating_add(duration_secs.saturating_mul(1000)),
        }
    }
}

/// 自动清除的延迟（秒），不小于 0
pub fn clear_delay_secs(duration_secs: i64, position_secs: i64) -> i64 {
    duration_secs
        .saturating_sub(position_secs)
        .saturating_add(CLEAR_GRACE_SECS)
        .max(0)
}
