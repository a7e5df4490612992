//! Chat Commands - 对话相关命令

/// 发送对话消息命令
#[derive(Debug, Clone)]
pub struct SendChatMessage {
    pub session_id: String,
    /// 缺失或非字符串时为 None
    pub message: Option<String>,
}

/// 发送对话消息响应
#[derive(Debug, Clone)]
pub struct SendChatMessageResponse {
    pub response: String,
}

/// 清空会话历史命令
#[derive(Debug, Clone)]
pub struct ResetConversation {
    pub session_id: String,
}
