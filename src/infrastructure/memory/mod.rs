//! Memory Layer - In-Memory State Management
//!
//! 实现 ConversationStore，按会话管理对话历史的内存状态

mod conversation_store;

pub use conversation_store::InMemoryConversationStore;
