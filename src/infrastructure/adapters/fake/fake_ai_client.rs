//! Fake AI Client - 离线/测试用的 AI 客户端
//!
//! 实现全部四个出站端口，不访问任何外部服务：
//! - 对话：回显最后一条 user 消息
//! - 图像：固定的 1x1 PNG
//! - 识别：固定文本
//! - 合成：静音 WAV

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{
    AiServiceError, AudioFormat, ChatCompletion, ChatCompletionPort, GeneratedImage,
    ImageGenerationPort, ImageGenerationRequest, SpeechRequest, SpeechToTextPort,
    SynthesizedAudio, Transcription, TtsEnginePort,
};
use crate::domain::conversation::{ConversationMessage, Role};

/// 1x1 透明 PNG
const PIXEL_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Fake AI Client 配置
#[derive(Debug, Clone)]
pub struct FakeAiClientConfig {
    /// 固定返回的识别文本
    pub transcription: String,
    /// 合成音频时长（毫秒）
    pub duration_ms: u32,
    /// 采样率
    pub sample_rate: u32,
    /// 模拟延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeAiClientConfig {
    fn default() -> Self {
        Self {
            transcription: "This is a fake transcription.".to_string(),
            duration_ms: 500,
            sample_rate: 16000,
            latency_ms: 200,
        }
    }
}

/// Fake AI Client
pub struct FakeAiClient {
    config: FakeAiClientConfig,
}

impl FakeAiClient {
    pub fn new(config: FakeAiClientConfig) -> Self {
        tracing::info!(
            latency_ms = config.latency_ms,
            "FakeAiClient initialized"
        );
        Self { config }
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

/// 生成 16-bit 单声道静音 WAV
pub fn silent_wav(duration_ms: u32, sample_rate: u32) -> Vec<u8> {
    let samples = (sample_rate as u64 * duration_ms as u64 / 1000) as u32;
    let data_len = samples * 2;
    let byte_rate = sample_rate * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    wav
}

#[async_trait]
impl ChatCompletionPort for FakeAiClient {
    async fn complete(
        &self,
        messages: &[ConversationMessage],
    ) -> Result<ChatCompletion, AiServiceError> {
        self.simulate_latency().await;

        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        tracing::debug!(messages = messages.len(), "FakeAiClient: echoing last user message");

        Ok(ChatCompletion {
            content: Some(format!("You said: {}", last_user)),
        })
    }
}

#[async_trait]
impl ImageGenerationPort for FakeAiClient {
    async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<GeneratedImage, AiServiceError> {
        self.simulate_latency().await;
        tracing::debug!(size = %request.size, "FakeAiClient: returning fixed image");

        Ok(GeneratedImage {
            base64: Some(PIXEL_PNG_BASE64.to_string()),
        })
    }
}

#[async_trait]
impl SpeechToTextPort for FakeAiClient {
    async fn transcribe(&self, audio_base64: &str) -> Result<Transcription, AiServiceError> {
        self.simulate_latency().await;
        tracing::debug!(
            payload_len = audio_base64.len(),
            "FakeAiClient: returning fixed transcription"
        );

        Ok(Transcription {
            text: Some(self.config.transcription.clone()),
        })
    }
}

#[async_trait]
impl TtsEnginePort for FakeAiClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedAudio, AiServiceError> {
        self.simulate_latency().await;
        tracing::debug!(
            voice = %request.voice_id,
            text_len = request.text.char_count(),
            "FakeAiClient: returning silent audio"
        );

        Ok(SynthesizedAudio {
            data: silent_wav(self.config.duration_ms, self.config.sample_rate),
            format: AudioFormat::Wav,
        })
    }
}
