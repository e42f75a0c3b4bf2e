//! Scheduler Callback Handler
//!
//! 外部调度器（或 transport 进程）到期回调的入口

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::SchedulerCallbackCommand;
use crate::infrastructure::http::dto::{ApiResponse, Empty, SchedulerCallbackRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn scheduler_callback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SchedulerCallbackRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let cmd = SchedulerCallbackCommand {
        schedule_id: req.schedule_id,
        payload: req.payload,
        is_recurring: req.is_recurring,
    };

    state.scheduler_callbacks.on_callback(cmd).await?;

    Ok(Json(ApiResponse::ok()))
}
