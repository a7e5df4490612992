//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::AiServiceError;
use crate::domain::conversation::ConversationError;
use crate::domain::image::ImageError;
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务返回了空结果
    #[error("Empty result: {0}")]
    EmptyResult(&'static str),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<AiServiceError> for ApplicationError {
    fn from(err: AiServiceError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<ConversationError> for ApplicationError {
    fn from(err: ConversationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ImageError> for ApplicationError {
    fn from(err: ImageError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
