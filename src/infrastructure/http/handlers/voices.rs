//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::{ApiResponse, VoiceResponse, VoicesResponse};
use crate::infrastructure::http::state::AppState;

/// 获取音色列表
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<ApiResponse<VoicesResponse>> {
    let voices = state
        .list_voices_handler
        .handle(ListVoices)
        .into_iter()
        .map(VoiceResponse::from)
        .collect();

    Json(ApiResponse::success(VoicesResponse { voices }))
}
