//! Chat HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ResetConversation, SendChatMessage};
use crate::infrastructure::http::dto::{
    string_field, ApiResponse, ChatRequest, ChatResponse, MessageResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, SessionId};
use crate::infrastructure::http::state::AppState;

/// 发送对话消息
pub async fn send_chat_message(
    State(state): State<Arc<AppState>>,
    session: SessionId,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ApiResponse<ChatResponse>>, ApiError> {
    let command = SendChatMessage {
        session_id: session.0,
        message: string_field(req.message),
    };

    let result = state.send_chat_message_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ChatResponse {
        response: result.response,
    })))
}

/// 清空对话历史
pub async fn reset_chat(
    State(state): State<Arc<AppState>>,
    session: SessionId,
) -> Json<ApiResponse<MessageResponse>> {
    state.reset_conversation_handler.handle(ResetConversation {
        session_id: session.0,
    });

    Json(ApiResponse::success(MessageResponse {
        message: "Conversation history cleared",
    }))
}
