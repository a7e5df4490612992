//! TTS Engine Port - TTS 合成引擎抽象
//!
//! 定义 TTS 合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;

use super::AiServiceError;
use crate::domain::voice::{SpeechSpeed, SpeechText};

/// 合成音频格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
}

impl AudioFormat {
    /// 上游请求中的 response_format 字段
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
        }
    }
}

/// TTS 合成请求
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的文本内容
    pub text: SpeechText,
    /// 目标服务的音色 ID
    pub voice_id: String,
    /// 语速
    pub speed: SpeechSpeed,
}

/// TTS 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 原始音频数据
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行 TTS 合成
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedAudio, AiServiceError>;
}
