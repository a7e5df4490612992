//! Conversation Context - 会话上下文
//!
//! 职责:
//! - 对话消息（Turn）定义
//! - 有界对话缓冲区（固定保留 system prompt）

mod buffer;
mod errors;
mod message;

pub use buffer::{ConversationBuffer, DEFAULT_MAX_HISTORY};
pub use errors::ConversationError;
pub use message::{ConversationMessage, Role};
