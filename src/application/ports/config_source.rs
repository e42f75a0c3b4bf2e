//! Config Source Port - 插件配置来源
//!
//! 键值形式的字符串配置，具体实现在 infrastructure/adapters/config_source

use thiserror::Error;

/// Config Source 错误
#[derive(Debug, Error)]
pub enum ConfigSourceError {
    #[error("Config source unavailable: {0}")]
    Unavailable(String),

    #[error("Config source parse error: {0}")]
    ParseError(String),
}

/// Config Source Port
///
/// `get` 返回 `Ok(None)` 表示键不存在
pub trait ConfigSourcePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError>;
}
