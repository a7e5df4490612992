//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Conversation Context: 有界对话缓冲区
//! - Voice Context: 音色目录与 TTS 输入校验
//! - Image Context: 图像提示词与尺寸

pub mod conversation;
pub mod image;
pub mod voice;
