//! Cache Sweeper - 定期清理过期 URL 缓存

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::application::ports::UrlCachePort;

/// Sweeper 配置
#[derive(Debug, Clone)]
pub struct CacheSweeperConfig {
    /// 清理间隔（秒）
    pub interval_secs: u64,
}

impl Default for CacheSweeperConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600,
        }
    }
}

/// 缓存清理 Worker
///
/// 读取时的惰性删除只覆盖再次播放的曲目，其余过期条目在这里删除
pub struct CacheSweeper {
    config: CacheSweeperConfig,
    cache: Arc<dyn UrlCachePort>,
}

impl CacheSweeper {
    pub fn new(config: CacheSweeperConfig, cache: Arc<dyn UrlCachePort>) -> Self {
        Self { config, cache }
    }

    /// 执行一次清理，失败只记录日志
    pub async fn sweep_once(&self) -> usize {
        match self.cache.purge_expired().await {
            Ok(removed) => {
                if removed > 0 {
                    tracing::info!(removed, "Expired URL cache entries purged");
                }
                removed
            }
            Err(e) => {
                tracing::warn!(error = %e, "URL cache sweep failed");
                0
            }
        }
    }

    /// 按间隔循环清理，永不返回
    pub async fn run(self) {
        let period = Duration::from_secs(self.config.interval_secs.max(1));
        tracing::info!(interval_secs = period.as_secs(), "CacheSweeper started");

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // 第一次 tick 立即完成，跳过以免启动时就扫描
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.sweep_once().await;
        }
    }
}
