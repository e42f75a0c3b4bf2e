//! Presence Transport Adapters
//!
//! - relay: 转发给外部网关进程
//! - logging: 只记录日志，本地运行与测试用

mod logging_transport;
mod relay_transport;

pub use logging_transport::LoggingPresenceTransport;
pub use relay_transport::{HttpPresenceRelay, PresenceRelayConfig};
