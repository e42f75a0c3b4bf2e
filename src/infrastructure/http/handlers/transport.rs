//! Transport Event Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::TransportClosedCommand;
use crate::infrastructure::http::dto::{ApiResponse, Empty, TransportClosedRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn transport_closed(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransportClosedRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    if req.username.is_empty() {
        return Err(ApiError::BadRequest("username is required".to_string()));
    }

    state
        .transport_events
        .on_transport_closed(TransportClosedCommand {
            username: req.username,
        })
        .await?;

    Ok(Json(ApiResponse::ok()))
}
