//! Conversation Store Port - 会话对话历史管理
//!
//! 每个会话（session id）独立持有一个有界对话缓冲区，具体实现在 infrastructure/memory 层

use crate::domain::conversation::ConversationMessage;

/// Conversation Store Port
///
/// 所有状态只存在于进程内存中，重启即丢失
pub trait ConversationStorePort: Send + Sync {
    /// 追加一条消息（超出容量时自动裁剪），返回追加后的完整历史快照
    ///
    /// 会话不存在时自动创建
    fn append(&self, session_id: &str, message: ConversationMessage) -> Vec<ConversationMessage>;

    /// 获取会话历史；会话不存在时只返回 system prompt
    fn history(&self, session_id: &str) -> Vec<ConversationMessage>;

    /// 清空会话历史，只保留 system prompt
    fn reset(&self, session_id: &str);

    /// 删除整个会话
    fn remove(&self, session_id: &str) -> bool;

    /// 获取空闲超时的会话 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 当前会话数
    fn session_count(&self) -> usize;
}
