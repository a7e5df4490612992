//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChatCompletion、ImageGeneration、SpeechToText、TtsEngine、ConversationStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Chat commands
    ResetConversation,
    SendChatMessage,
    SendChatMessageResponse,
    // Image commands
    GenerateImage,
    GenerateImageResponse,
    // Speech commands
    SynthesizeSpeech,
    SynthesizeSpeechResponse,
    TranscribeAudio,
    TranscribeAudioResponse,
    // Handlers
    handlers::{
        GenerateImageHandler, ResetConversationHandler, SendChatMessageHandler,
        SynthesizeSpeechHandler, TranscribeAudioHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    AiServiceError, AudioFormat, ChatCompletion, ChatCompletionPort, ConversationStorePort,
    GeneratedImage, ImageGenerationPort, ImageGenerationRequest, SpeechRequest, SpeechToTextPort,
    SynthesizedAudio, Transcription, TtsEnginePort,
};

pub use queries::{
    handlers::{ListVoicesHandler, VoiceSummary},
    ListVoices,
};
