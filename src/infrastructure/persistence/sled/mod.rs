//! Sled 存储

mod url_cache;

pub use url_cache::{SledCacheConfig, SledUrlCache};
