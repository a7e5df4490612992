//! In-Memory Conversation Store Implementation

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::ConversationStorePort;
use crate::domain::conversation::{ConversationBuffer, ConversationMessage};

/// 单个会话
#[derive(Debug, Clone)]
struct Conversation {
    buffer: ConversationBuffer,
    last_activity: DateTime<Utc>,
}

/// 内存会话存储
///
/// 每个 session id 对应一个独立的有界对话缓冲区。
/// 单次 append/reset 在 DashMap 分片锁内完成，彼此之间是原子的。
pub struct InMemoryConversationStore {
    conversations: DashMap<String, Conversation>,
    system_prompt: String,
    max_history: usize,
}

impl InMemoryConversationStore {
    pub fn new(system_prompt: impl Into<String>, max_history: usize) -> Self {
        Self {
            conversations: DashMap::new(),
            system_prompt: system_prompt.into(),
            max_history,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn new_conversation(&self) -> Conversation {
        Conversation {
            buffer: ConversationBuffer::new(self.system_prompt.clone(), self.max_history),
            last_activity: Utc::now(),
        }
    }
}

impl ConversationStorePort for InMemoryConversationStore {
    fn append(&self, session_id: &str, message: ConversationMessage) -> Vec<ConversationMessage> {
        let mut conversation = self
            .conversations
            .entry(session_id.to_string())
            .or_insert_with(|| self.new_conversation());
        conversation.buffer.push(message);
        conversation.last_activity = Utc::now();

        tracing::debug!(
            session_id = %session_id,
            history_len = conversation.buffer.len(),
            "Conversation message appended"
        );

        conversation.buffer.messages().to_vec()
    }

    fn history(&self, session_id: &str) -> Vec<ConversationMessage> {
        self.conversations
            .get(session_id)
            .map(|c| c.buffer.messages().to_vec())
            .unwrap_or_else(|| vec![ConversationMessage::system(self.system_prompt.clone())])
    }

    fn reset(&self, session_id: &str) {
        if let Some(mut conversation) = self.conversations.get_mut(session_id) {
            conversation.buffer.reset();
            conversation.last_activity = Utc::now();
        }
        tracing::info!(session_id = %session_id, "Conversation history cleared");
    }

    fn remove(&self, session_id: &str) -> bool {
        self.conversations.remove(session_id).is_some()
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();
        // 超出 chrono::Duration 表示范围时视为永不过期
        let Some(timeout) = i64::try_from(idle_timeout_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
        else {
            return Vec::new();
        };

        self.conversations
            .iter()
            .filter_map(|entry| {
                let elapsed = now - entry.last_activity;
                if elapsed > timeout {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect()
    }

    fn session_count(&self) -> usize {
        self.conversations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Role;

    const PROMPT: &str = "system prompt";

    #[test]
    fn test_append_creates_session_and_returns_snapshot() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        assert_eq!(store.session_count(), 0);

        let history = store.append("s1", ConversationMessage::user("hi"));
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::System);
        assert_eq!(history[1], ConversationMessage::user("hi"));
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        store.append("a", ConversationMessage::user("from a"));
        store.append("b", ConversationMessage::user("from b"));
        store.append("b", ConversationMessage::assistant("reply b"));

        assert_eq!(store.history("a").len(), 2);
        assert_eq!(store.history("b").len(), 3);
    }

    #[test]
    fn test_history_of_unknown_session_is_system_prompt_only() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        let history = store.history("missing");
        assert_eq!(history, vec![ConversationMessage::system(PROMPT)]);
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_append_respects_capacity() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        for i in 0..50 {
            store.append("s", ConversationMessage::user(format!("m{}", i)));
        }
        let history = store.history("s");
        assert_eq!(history.len(), 20);
        assert_eq!(history[0].content, PROMPT);
        assert_eq!(history[1].content, "m31");
        assert_eq!(history[19].content, "m49");
    }

    #[test]
    fn test_reset_and_remove() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        store.append("s", ConversationMessage::user("one"));
        store.append("s", ConversationMessage::assistant("two"));

        store.reset("s");
        assert_eq!(store.history("s").len(), 1);
        assert_eq!(store.session_count(), 1);

        // 不存在的会话 reset 不创建新会话
        store.reset("other");
        assert_eq!(store.session_count(), 1);

        assert!(store.remove("s"));
        assert!(!store.remove("s"));
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_expired_sessions() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        store.append("idle", ConversationMessage::user("old"));
        store.append("active", ConversationMessage::user("new"));

        if let Some(mut conversation) = store.conversations.get_mut("idle") {
            conversation.last_activity = Utc::now() - chrono::Duration::seconds(120);
        }

        let expired = store.get_expired_sessions(60);
        assert_eq!(expired, vec!["idle".to_string()]);
    }

    #[test]
    fn test_huge_timeout_never_expires_active_sessions() {
        let store = InMemoryConversationStore::new(PROMPT, 20);
        store.append("s", ConversationMessage::user("hi"));

        for timeout in [u64::MAX, i64::MAX as u64, i64::MAX as u64 / 1000 + 1] {
            assert!(store.get_expired_sessions(timeout).is_empty(), "timeout: {}", timeout);
        }
        assert_eq!(store.session_count(), 1);
    }
}
