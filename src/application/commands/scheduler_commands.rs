//! Scheduler / Transport Commands - 回调与连接事件

/// 调度器回调
#[derive(Debug, Clone)]
pub struct SchedulerCallbackCommand {
    pub schedule_id: String,
    pub payload: String,
    pub is_recurring: bool,
}

impl From<crate::application::ports::FiredCallback> for SchedulerCallbackCommand {
    fn from(fired: crate::application::ports::FiredCallback) -> Self {
        Self {
            schedule_id: fired.schedule_id,
            payload: fired.payload,
            is_recurring: fired.is_recurring,
        }
    }
}

/// transport 报告用户连接已关闭
#[derive(Debug, Clone)]
pub struct TransportClosedCommand {
    pub username: String,
}
