//! HTTP Routes
//!
//! API Endpoints:
//! - /api/chat            POST    发送对话消息
//! - /api/chat            DELETE  清空对话历史
//! - /api/generate-image  POST    文生图
//! - /api/transcribe      POST    语音识别
//! - /api/tts             POST    语音合成（返回音频二进制）
//! - /api/voices          GET     音色列表
//! - /api/ping            GET     健康检查
//!
//! 会话由 X-Session-Id 请求头区分，缺省为 default

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
        .route(
            "/chat",
            post(handlers::send_chat_message).delete(handlers::reset_chat),
        )
        .route("/generate-image", post(handlers::generate_image))
        .route("/transcribe", post(handlers::transcribe))
        .route("/tts", post(handlers::text_to_speech))
        .route("/voices", get(handlers::list_voices))
}
