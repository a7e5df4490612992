//! Voice Context - 音色与语音限界上下文
//!
//! 职责:
//! - 静态音色目录（主 TTS 服务 / OpenAI 兼容服务，两者互不相交）
//! - TTS 输入文本与语速的校验
//! - 语音识别输入（base64 / data URL）的解析

mod catalog;
mod errors;
mod value_objects;

pub use catalog::{
    all_voices, find_voice, Gender, Voice, VoiceCatalog, DEFAULT_VOICE_ID, OPENAI_VOICES,
    PRIMARY_VOICES,
};
pub use errors::VoiceError;
pub use value_objects::{AudioPayload, SpeechSpeed, SpeechText, MAX_TEXT_LENGTH};
