//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                     GET   健康检查
//! - /api/scrobbler/is_authorized  POST  用户是否已配置 token
//! - /api/scrobbler/now_playing    POST  更新 presence
//! - /api/scrobbler/scrobble       POST  提交 scrobble（忽略）
//! - /api/scheduler/callback       POST  调度器回调
//! - /api/transport/closed         POST  transport 报告连接关闭
//! - /api/spotify/resolve          POST  解析 Spotify URL

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/scrobbler", scrobbler_routes())
        .route("/scheduler/callback", post(handlers::scheduler_callback))
        .route("/transport/closed", post(handlers::transport_closed))
        .route("/spotify/resolve", post(handlers::resolve_spotify_url))
}

/// Scrobbler 路由
fn scrobbler_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/is_authorized", post(handlers::is_authorized))
        .route("/now_playing", post(handlers::now_playing))
        .route("/scrobble", post(handlers::scrobble))
}
