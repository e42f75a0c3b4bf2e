//! Scheduler Port - 一次性回调调度
//!
//! 定义调度器的抽象接口，具体实现在 infrastructure/memory 层

use async_trait::async_trait;
use thiserror::Error;

/// Scheduler 错误
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Schedule not found: {0}")]
    NotFound(String),

    #[error("Schedule rejected: {0}")]
    Rejected(String),

    #[error("Scheduler unavailable: {0}")]
    Unavailable(String),
}

/// 到期触发的回调
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredCallback {
    pub schedule_id: String,
    pub payload: String,
    pub is_recurring: bool,
}

/// Scheduler Port
#[async_trait]
pub trait SchedulerPort: Send + Sync {
    /// 在 `delay_secs` 秒后触发一次，返回调度句柄
    ///
    /// 同一 `schedule_id` 再次调度会替换旧的调度
    async fn schedule_one_time(
        &self,
        delay_secs: i64,
        payload: &str,
        schedule_id: &str,
    ) -> Result<String, SchedulerError>;

    /// 取消调度
    async fn cancel_schedule(&self, schedule_id: &str) -> Result<(), SchedulerError>;
}
