//! HTTP Middleware
//!
//! 请求耗时与 HTTP 状态码错误日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// HTTP 状态码错误日志中间件
///
/// 4xx 记 warn，5xx 记 error，其余只在 debug 级别记录耗时。
/// 业务错误（errno != 0）在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(method = %method, uri = %uri, status = status.as_u16(), elapsed_ms, "HTTP request");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::post,
        Json, Router,
    };
    use tower::util::ServiceExt;

    async fn callback_handler(Json(body): Json<serde_json::Value>) -> StatusCode {
        match body["payload"].as_str() {
            Some("heartbeat") => StatusCode::OK,
            Some(_) => StatusCode::UNPROCESSABLE_ENTITY,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/callback", post(callback_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn send(body: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/callback")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_status_passes_through() {
        assert_eq!(send(r#"{"payload":"heartbeat"}"#).await, StatusCode::OK);
        assert_eq!(
            send(r#"{"payload":"bogus"}"#).await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(send(r#"{}"#).await, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_extractor_rejection_is_client_error() {
        assert!(send("not json").await.is_client_error());
    }
}
