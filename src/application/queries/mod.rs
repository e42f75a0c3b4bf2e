//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：Spotify URL 解析

mod spotify_queries;

pub mod handlers;

pub use spotify_queries::*;
