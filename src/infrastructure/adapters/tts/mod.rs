//! TTS Adapter - OpenAI 兼容 TTS 客户端实现

mod openai_speech_client;

pub use openai_speech_client::{OpenAiSpeechClient, OpenAiSpeechClientConfig};
