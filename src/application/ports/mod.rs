//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artwork;
mod config_source;
mod http_client;
mod presence_transport;
mod scheduler;
mod session_registry;
mod spotify_lookup;
mod url_cache;

#[cfg(test)]
pub mod testing;

pub use artwork::ArtworkResolverPort;
pub use config_source::{ConfigSourceError, ConfigSourcePort};
pub use http_client::{HttpClientError, HttpClientPort, HttpRequest, HttpResponse};
pub use presence_transport::{PresenceTransportPort, TransportError};
pub use scheduler::{FiredCallback, SchedulerError, SchedulerPort};
pub use session_registry::{SessionError, SessionRegistryPort, UserSession};
pub use spotify_lookup::SpotifyLookupPort;
pub use url_cache::{CacheError, UrlCachePort};
