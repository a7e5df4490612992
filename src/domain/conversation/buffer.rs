//! Conversation Context - Bounded Buffer
//!
//! 固定容量的对话滑动窗口，index 0 固定为 system prompt

use super::ConversationMessage;

/// 默认最大历史长度（包含 system prompt）
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// 容量下限：system prompt + 至少一条对话
const MIN_CAPACITY: usize = 2;

/// 有界对话缓冲区
///
/// 不变量:
/// - messages[0] 始终是创建时的 system prompt，永不被淘汰
/// - messages.len() <= capacity
/// - 其余消息保持插入顺序，超出容量时淘汰最旧的 user/assistant 消息
#[derive(Debug, Clone)]
pub struct ConversationBuffer {
    messages: Vec<ConversationMessage>,
    capacity: usize,
}

// 至少包含 system prompt，不存在空状态
#[allow(clippy::len_without_is_empty)]
impl ConversationBuffer {
    /// 创建只包含 system prompt 的缓冲区
    ///
    /// capacity 小于 2 时按 2 处理
    pub fn new(system_prompt: impl Into<String>, capacity: usize) -> Self {
        Self {
            messages: vec![ConversationMessage::system(system_prompt)],
            capacity: capacity.max(MIN_CAPACITY),
        }
    }

    /// 追加一条消息，超出容量时从 index 1 开始淘汰
    pub fn push(&mut self, message: ConversationMessage) {
        self.messages.push(message);
        self.trim();
    }

    /// 清空对话，只保留 system prompt
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    fn trim(&mut self) {
        let len = self.messages.len();
        if len > self.capacity {
            let excess = len - self.capacity;
            self.messages.drain(1..1 + excess);
        }
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
