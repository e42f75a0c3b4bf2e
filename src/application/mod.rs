//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ConfigSource、UrlCache、Scheduler、PresenceTransport 等）
//! - capabilities: 宿主可调用的能力 trait
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - plugin_settings: 运行时插件设置
//! - error: 应用层错误定义

pub mod capabilities;
pub mod commands;
pub mod error;
pub mod plugin_settings;
pub mod ports;
pub mod queries;

// Re-exports
pub use capabilities::{ScrobblerCapability, SchedulerCallbackCapability, TransportEventCapability};

pub use commands::{
    IsAuthorizedCommand,
    NowPlayingCommand,
    NowPlayingResponse,
    SchedulerCallbackCommand,
    ScrobbleCommand,
    TransportClosedCommand,
    // Handlers
    handlers::{CallbackRouter, PresenceOrchestrator},
};

pub use error::ApplicationError;

pub use plugin_settings::PluginSettings;

pub use ports::{
    // Artwork
    ArtworkResolverPort,
    // Config source
    ConfigSourceError,
    ConfigSourcePort,
    // HTTP client
    HttpClientError,
    HttpClientPort,
    HttpRequest,
    HttpResponse,
    // Presence transport
    PresenceTransportPort,
    TransportError,
    // Scheduler
    FiredCallback,
    SchedulerError,
    SchedulerPort,
    // Session registry
    SessionError,
    SessionRegistryPort,
    UserSession,
    // Spotify lookup
    SpotifyLookupPort,
    // URL cache
    CacheError,
    UrlCachePort,
};

pub use queries::{
    ResolveSpotifyUrlQuery,
    ResolveSpotifyUrlResponse,
    // Handlers
    handlers::SpotifyUrlResolver,
};
