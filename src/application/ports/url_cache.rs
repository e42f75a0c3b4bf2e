//! URL Cache Port - 键值缓存
//!
//! 带 TTL 的字符串缓存抽象，具体实现使用内存 (DashMap) 或 Sled

use async_trait::async_trait;
use thiserror::Error;

/// Cache 错误
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// URL Cache Port
#[async_trait]
pub trait UrlCachePort: Send + Sync {
    /// 读取字符串，过期或不存在时返回 None
    async fn get_string(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// 写入字符串，`ttl_secs` 从调用时刻起算
    async fn set_string(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError>;

    /// 删除所有已过期条目，返回删除数量
    async fn purge_expired(&self) -> Result<usize, CacheError>;
}
