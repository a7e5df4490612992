//! Chat Command Handlers

use std::sync::Arc;

use crate::application::commands::{ResetConversation, SendChatMessage, SendChatMessageResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatCompletionPort, ConversationStorePort};
use crate::domain::conversation::{ConversationError, ConversationMessage};

// ============================================================================
// SendChatMessage
// ============================================================================

/// SendChatMessage Handler
///
/// 追加 user 消息 -> 发送完整历史 -> 追加 assistant 回复
pub struct SendChatMessageHandler {
    store: Arc<dyn ConversationStorePort>,
    chat: Arc<dyn ChatCompletionPort>,
}

impl SendChatMessageHandler {
    pub fn new(store: Arc<dyn ConversationStorePort>, chat: Arc<dyn ChatCompletionPort>) -> Self {
        Self { store, chat }
    }

    pub async fn handle(
        &self,
        command: SendChatMessage,
    ) -> Result<SendChatMessageResponse, ApplicationError> {
        let raw = command.message.ok_or(ConversationError::MissingMessage)?;
        let user_turn = ConversationMessage::user_input(&raw)?;

        // 校验通过后才写入历史
        let history = self.store.append(&command.session_id, user_turn);

        tracing::debug!(
            session_id = %command.session_id,
            history_len = history.len(),
            "Requesting chat completion"
        );

        // 上游失败时 user 消息保留在历史中
        let completion = self.chat.complete(&history).await?;
        let reply = completion
            .content
            .filter(|c| !c.is_empty())
            .ok_or(ApplicationError::EmptyResult("Failed to generate response"))?;

        self.store
            .append(&command.session_id, ConversationMessage::assistant(reply.clone()));

        tracing::info!(
            session_id = %command.session_id,
            reply_len = reply.len(),
            "Chat turn completed"
        );

        Ok(SendChatMessageResponse { response: reply })
    }
}

// ============================================================================
// ResetConversation
// ============================================================================

/// ResetConversation Handler
pub struct ResetConversationHandler {
    store: Arc<dyn ConversationStorePort>,
}

impl ResetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: ResetConversation) {
        self.store.reset(&command.session_id);
    }
}
