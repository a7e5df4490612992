//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chat_completion;
mod conversation_store;
mod error;
mod image_generation;
mod speech_to_text;
mod tts_engine;

pub use chat_completion::{ChatCompletion, ChatCompletionPort};
pub use conversation_store::ConversationStorePort;
pub use error::AiServiceError;
pub use image_generation::{GeneratedImage, ImageGenerationPort, ImageGenerationRequest};
pub use speech_to_text::{SpeechToTextPort, Transcription};
pub use tts_engine::{AudioFormat, SpeechRequest, SynthesizedAudio, TtsEnginePort};
