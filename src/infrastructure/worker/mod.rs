//! Worker Layer - Background Task Processing
//!
//! - CallbackWorker: 处理调度器到期的回调
//! - CacheSweeper: 定期清理过期 URL 缓存

mod cache_sweeper;
mod callback_worker;

pub use cache_sweeper::{CacheSweeper, CacheSweeperConfig};
pub use callback_worker::{CallbackWorker, CallbackWorkerConfig};
