//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionRegistry、UrlCache 和 Scheduler，管理用户会话、URL 缓存与定时回调的内存状态

mod scheduler;
mod session_registry;
mod url_cache;

pub use scheduler::TokioScheduler;
pub use session_registry::InMemorySessionRegistry;
pub use url_cache::InMemoryUrlCache;
