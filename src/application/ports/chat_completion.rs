//! Chat Completion Port - 对话补全服务抽象

use async_trait::async_trait;

use super::AiServiceError;
use crate::domain::conversation::ConversationMessage;

/// 对话补全结果
///
/// content 可能缺失或为空，由调用方判定
#[derive(Debug, Clone, Default)]
pub struct ChatCompletion {
    pub content: Option<String>,
}

/// Chat Completion Port
#[async_trait]
pub trait ChatCompletionPort: Send + Sync {
    /// 发送完整对话历史（含 system prompt），返回 assistant 回复
    async fn complete(&self, messages: &[ConversationMessage])
        -> Result<ChatCompletion, AiServiceError>;
}
