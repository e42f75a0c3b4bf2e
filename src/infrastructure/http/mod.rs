//! HTTP Layer - RESTful API
//!
//! 宿主通过 HTTP 调用 scrobbler / scheduler / transport 能力

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
