//! AI Service Error - 外部 AI 服务错误
//!
//! 所有出站服务端口共用的错误类型

use thiserror::Error;

/// 外部服务调用错误
#[derive(Debug, Error)]
pub enum AiServiceError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Client configuration error: {0}")]
    Configuration(String),
}
