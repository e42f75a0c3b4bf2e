//! Tunecord - Navidrome 播放状态同步到 Discord Rich Presence
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Track Context: 曲目元数据与主艺人解析
//! - Spotify Context: 缓存 key 与链接构造
//! - Presence Context: 活动负载、时间窗口、回调负载
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ConfigSource, UrlCache, Scheduler, PresenceTransport, SpotifyLookup 等）
//! - Commands: now playing / scrobble / 调度回调
//! - Queries: Spotify URL 解析
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 宿主调用的 RESTful API
//! - Memory: 会话表、URL 缓存、tokio 定时调度
//! - Worker: CallbackWorker 处理到期回调
//! - Persistence: Sled URL 缓存
//! - Adapters: reqwest, ListenBrainz, presence relay, 配置来源, 封面模板

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
