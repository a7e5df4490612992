//! Worker Layer - Background Task Processing
//!
//! 实现 ConversationGcWorker，定期回收空闲会话

mod conversation_gc;

pub use conversation_gc::{ConversationGcConfig, ConversationGcWorker};
