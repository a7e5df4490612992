//! Speech-to-Text Port - 语音识别服务抽象

use async_trait::async_trait;

use super::AiServiceError;

/// 识别结果
#[derive(Debug, Clone, Default)]
pub struct Transcription {
    pub text: Option<String>,
}

/// Speech-to-Text Port
#[async_trait]
pub trait SpeechToTextPort: Send + Sync {
    /// 识别 base64 编码的音频（不含 data URL 前缀）
    async fn transcribe(&self, audio_base64: &str) -> Result<Transcription, AiServiceError>;
}
