//! Session Registry Port - 用户连接会话
//!
//! 按用户名索引的会话表，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Session Registry 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
}

/// 用户会话（in-memory，不持久化）
#[derive(Debug, Clone)]
pub struct UserSession {
    pub username: String,
    pub token: String,
    pub connected_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl UserSession {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            token: token.into(),
            connected_at: now,
            last_activity: now,
        }
    }
}

/// Session Registry Port
pub trait SessionRegistryPort: Send + Sync {
    /// 登记已连接的会话，覆盖同名旧会话
    fn open(&self, session: UserSession);

    /// 获取会话
    fn get(&self, username: &str) -> Option<UserSession>;

    /// 会话是否存在且 token 一致
    fn is_open_with(&self, username: &str, token: &str) -> bool;

    /// 更新最后活动时间
    fn touch(&self, username: &str);

    /// 关闭会话
    fn close(&self, username: &str) -> Result<UserSession, SessionError>;

    /// 获取所有用户名
    fn list_all(&self) -> Vec<String>;
}
