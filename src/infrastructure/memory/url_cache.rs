//! In-Memory URL Cache Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::application::ports::{CacheError, UrlCachePort};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// 内存 URL 缓存
///
/// 过期条目在读取时惰性删除，其余由 CacheSweeper 定期清理
pub struct InMemoryUrlCache {
    entries: DashMap<String, Entry>,
}

impl InMemoryUrlCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryUrlCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlCachePort for InMemoryUrlCache {
    async fn get_string(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
            Some(_) => {}
            None => return Ok(None),
        }

        self.entries.remove_if(key, |_, e| e.expires_at <= now);
        tracing::debug!(cache_key = %key, "Expired cache entry evicted");
        Ok(None)
    }

    async fn set_string(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        let ttl = Duration::from_secs(ttl_secs.max(0) as u64);
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, CacheError> {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        let removed = before.saturating_sub(self.entries.len());

        tracing::debug!(removed, "Purged expired URL cache entries");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get() {
        let cache = InMemoryUrlCache::new();
        cache.set_string("k", "https://open.spotify.com/track/a", 60).await.unwrap();

        assert_eq!(
            cache.get_string("k").await.unwrap().as_deref(),
            Some("https://open.spotify.com/track/a")
        );
        assert_eq!(cache.get_string("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted() {
        let cache = InMemoryUrlCache::new();
        cache.set_string("k", "v", 0).await.unwrap();

        assert_eq!(cache.get_string("k").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_purge_expired_drops_unread_entries() {
        let cache = InMemoryUrlCache::new();
        cache.set_string("stale-1", "v", 0).await.unwrap();
        cache.set_string("stale-2", "v", 0).await.unwrap();
        cache.set_string("fresh", "v", 3600).await.unwrap();

        assert_eq!(cache.purge_expired().await.unwrap(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_string("fresh").await.unwrap().as_deref(), Some("v"));
        assert_eq!(cache.purge_expired().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let cache = InMemoryUrlCache::new();
        cache.set_string("k", "old", 60).await.unwrap();
        cache.set_string("k", "new", 60).await.unwrap();

        assert_eq!(cache.get_string("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }
}
