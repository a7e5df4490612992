//! Voxchat - 语音/图像对话网关
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Conversation: 有界对话缓冲区
//! - Voice: 音色目录与语音输入校验
//! - Image: 图像提示词与尺寸
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ChatCompletion, ImageGeneration, SpeechToText, TtsEngine, ConversationStore）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 按会话划分的内存对话存储
//! - Worker: 空闲会话回收
//! - Adapters: Z.ai Client, OpenAI 兼容 TTS Client, Fake Client

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
