//! Conversation Context - Messages

use serde::{Deserialize, Serialize};

use super::ConversationError;

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// 对话中的一条消息（Turn）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// 从用户输入构造 user 消息
    ///
    /// 输入会先 trim，空字符串视为无效
    pub fn user_input(raw: &str) -> Result<Self, ConversationError> {
        let content = raw.trim();
        if content.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        Ok(Self::user(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_is_trimmed() {
        let msg = ConversationMessage::user_input("  hello there \n").unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello there");
    }

    #[test]
    fn test_blank_user_input_rejected() {
        assert_eq!(
            ConversationMessage::user_input("   \t"),
            Err(ConversationError::EmptyMessage)
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(ConversationMessage::assistant("hi")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
    }
}
