//! Ping Handler
//!
//! 宿主探活用

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::infrastructure::http::dto::ApiResponse;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub service: &'static str,
    pub version: &'static str,
    /// 服务端当前时间（Unix 毫秒），宿主可据此估算时钟偏差
    pub server_time_ms: i64,
}

pub async fn ping() -> Json<ApiResponse<PingResponse>> {
    Json(ApiResponse::success(PingResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        server_time_ms: Utc::now().timestamp_millis(),
    }))
}
