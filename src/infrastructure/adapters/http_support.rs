//! HTTP 客户端公共逻辑
//!
//! reqwest 错误与上游错误响应到 AiServiceError 的映射

use serde::Deserialize;

use crate::application::ports::AiServiceError;

/// 上游错误响应体（兼容几种常见格式）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpstreamErrorBody {
    /// {"error": {"message": "..."}}
    Nested { error: UpstreamErrorDetail },
    /// {"error": "..."}
    Flat { error: String },
    /// {"message": "..."}
    Message { message: String },
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

impl UpstreamErrorBody {
    fn into_message(self) -> String {
        match self {
            Self::Nested { error } => error.message,
            Self::Flat { error } => error,
            Self::Message { message } => message,
        }
    }
}

/// 映射请求发送阶段的错误
pub(crate) fn map_send_error(service: &str, err: reqwest::Error) -> AiServiceError {
    if err.is_timeout() {
        AiServiceError::Timeout
    } else if err.is_connect() {
        AiServiceError::NetworkError(format!("Cannot connect to {}: {}", service, err))
    } else {
        AiServiceError::NetworkError(err.to_string())
    }
}

/// 检查响应状态码，非 2xx 时读取响应体构造错误
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, AiServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<UpstreamErrorBody>(&body)
        .map(UpstreamErrorBody::into_message)
        .unwrap_or(body);

    Err(AiServiceError::ServiceError(format!("HTTP {}: {}", status, detail)))
}
