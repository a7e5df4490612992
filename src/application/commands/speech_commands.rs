//! Speech Commands - 语音识别与合成命令

use crate::application::ports::SynthesizedAudio;

/// 语音识别命令
#[derive(Debug, Clone)]
pub struct TranscribeAudio {
    /// base64 或 data URL
    pub audio: Option<String>,
}

/// 语音识别响应
#[derive(Debug, Clone)]
pub struct TranscribeAudioResponse {
    pub transcription: String,
}

/// 语音合成命令
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub text: Option<String>,
    /// None 时使用默认音色
    pub voice: Option<String>,
    /// None 时为 1.0
    pub speed: Option<f64>,
}

/// 语音合成响应
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub voice_id: String,
    pub audio: SynthesizedAudio,
}
