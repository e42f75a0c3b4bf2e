//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 用户未配置 token
    #[error("User not authorized: {username}")]
    NotAuthorized { username: String },

    /// 暂时性失败，调用方可以重试
    #[error("Retry later: {0}")]
    RetryLater(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotAuthorized 错误
    pub fn not_authorized(username: impl Into<String>) -> Self {
        Self::NotAuthorized {
            username: username.into(),
        }
    }

    /// 创建可重试错误
    pub fn retry_later(message: impl Into<String>) -> Self {
        Self::RetryLater(message.into())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RetryLater(_))
    }
}

impl From<crate::application::ports::ConfigSourceError> for ApplicationError {
    fn from(err: crate::application::ports::ConfigSourceError) -> Self {
        Self::RetryLater(format!("failed to load configuration: {}", err))
    }
}

impl From<crate::application::ports::TransportError> for ApplicationError {
    fn from(err: crate::application::ports::TransportError) -> Self {
        Self::RetryLater(err.to_string())
    }
}
