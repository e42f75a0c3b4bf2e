//! HTTP Server
//!
//! 组装中间件并监听宿主请求

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 请求体只有曲目元数据与回调负载
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 4534)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 完整的 Router（路由 + 中间件 + 状态）
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), self.config.body_limit_bytes)
    }

    /// 启动服务器，`shutdown_signal` 完成后优雅退出
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.addr()).await?;
        let local_addr: SocketAddr = listener.local_addr()?;
        tracing::info!(addr = %local_addr, "HTTP server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}

fn build_router(state: Arc<AppState>, body_limit_bytes: usize) -> Router {
    // 宿主插件与中继可能来自任意来源，只开放 API 用到的方法
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    create_routes()
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::application::ports::testing::FakeTransport;
    use crate::infrastructure::http::routes::tests::test_state;

    fn router(body_limit_bytes: usize) -> Router {
        build_router(test_state(Arc::new(FakeTransport::new())), body_limit_bytes)
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:4534");
        assert_eq!(config.body_limit_bytes, DEFAULT_BODY_LIMIT);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let body = format!(r#"{{"username":"{}"}}"#, "a".repeat(512));
        let request = Request::builder()
            .method("POST")
            .uri("/api/scrobbler/is_authorized")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = router(128).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/scrobbler/now_playing")
            .header("origin", "http://navidrome.local")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = router(DEFAULT_BODY_LIMIT).oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
