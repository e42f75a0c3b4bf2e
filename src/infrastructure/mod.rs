//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;
pub mod memory;
pub mod persistence;
pub mod worker;

pub use memory::{InMemorySessionRegistry, InMemoryUrlCache, TokioScheduler};
pub use persistence::sled::SledUrlCache;
pub use worker::{CacheSweeper, CacheSweeperConfig, CallbackWorker, CallbackWorkerConfig};
