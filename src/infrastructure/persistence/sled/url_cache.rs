//! Sled-based URL Cache Implementation

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sled::Db;

use crate::application::ports::{CacheError, UrlCachePort};

const KEY_PREFIX: &str = "url:";

/// Sled 缓存配置
#[derive(Debug, Clone)]
pub struct SledCacheConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledCacheConfig {
    fn default() -> Self {
        Self {
            db_path: "data/url_cache.sled".to_string(),
        }
    }
}

/// 内部缓存条目
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InternalCacheEntry {
    value: String,
    /// Unix 秒
    expires_at: i64,
    created_at: i64,
}

/// Sled URL 缓存
///
/// 进程重启后保留解析结果；过期条目在读取时删除，其余由 CacheSweeper 定期清理
pub struct SledUrlCache {
    db: Db,
}

impl SledUrlCache {
    /// 创建新的缓存实例
    pub fn new(config: &SledCacheConfig) -> Result<Self, CacheError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| CacheError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            entries = db.scan_prefix(KEY_PREFIX).count(),
            "SledUrlCache initialized"
        );

        Ok(Self { db })
    }
}

#[async_trait]
impl UrlCachePort for SledUrlCache {
    async fn get_string(&self, key: &str) -> Result<Option<String>, CacheError> {
        let db_key = format!("{}{}", KEY_PREFIX, key);

        match self.db.get(&db_key) {
            Ok(Some(data)) => {
                let entry: InternalCacheEntry = bincode::deserialize(&data)
                    .map_err(|e| CacheError::SerializationError(e.to_string()))?;

                if entry.expires_at > Utc::now().timestamp() {
                    return Ok(Some(entry.value));
                }

                self.db
                    .remove(&db_key)
                    .map_err(|e| CacheError::DatabaseError(e.to_string()))?;
                tracing::debug!(cache_key = %key, "Expired cache entry evicted");
                Ok(None)
            }
            Ok(None) => Ok(None),
            Err(e) => Err(CacheError::DatabaseError(e.to_string())),
        }
    }

    async fn set_string(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        let now = Utc::now().timestamp();
        let entry = InternalCacheEntry {
            value: value.to_string(),
            expires_at: now + ttl_secs.max(0),
            created_at: now,
        };

        let entry_bytes =
            bincode::serialize(&entry).map_err(|e| CacheError::SerializationError(e.to_string()))?;

        self.db
            .insert(format!("{}{}", KEY_PREFIX, key), entry_bytes)
            .map_err(|e| CacheError::DatabaseError(e.to_string()))?;

        tracing::debug!(cache_key = %key, ttl_secs = ttl_secs, "URL cached");
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, CacheError> {
        let now = Utc::now().timestamp();
        let mut removed = 0;

        for item in self.db.scan_prefix(KEY_PREFIX) {
            let (key, value) = item.map_err(|e| CacheError::DatabaseError(e.to_string()))?;
            let expired = bincode::deserialize::<InternalCacheEntry>(&value)
                .map(|entry| entry.expires_at <= now)
                .unwrap_or(true);

            if expired {
                self.db
                    .remove(&key)
                    .map_err(|e| CacheError::DatabaseError(e.to_string()))?;
                removed += 1;
            }
        }

        tracing::debug!(removed = removed, "Purged expired URL cache entries");
        Ok(removed)
    }
}
