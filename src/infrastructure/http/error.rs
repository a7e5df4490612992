//! HTTP Error Handling
//!
//! 错误响应格式: {"success": false, "error": "..."}，配合真实 HTTP 状态码

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 输入验证失败 (400)
    BadRequest(String),
    /// 上游服务失败或结果为空 (500)
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
            }
        }

        let status = self.status();
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::EmptyResult(msg) => ApiError::Internal(msg.to_string()),
            ApplicationError::ExternalServiceError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
