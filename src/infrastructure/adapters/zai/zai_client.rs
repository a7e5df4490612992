//! Z.ai Client - 托管 AI 服务 HTTP 客户端
//!
//! 一个客户端实现全部四个出站端口：
//! - POST {base}/chat/completions   对话补全
//! - POST {base}/images/generations 文生图
//! - POST {base}/audio/asr          语音识别
//! - POST {base}/audio/tts          语音合成（返回 WAV 二进制）

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    AiServiceError, AudioFormat, ChatCompletion, ChatCompletionPort, GeneratedImage,
    ImageGenerationPort, ImageGenerationRequest, SpeechRequest, SpeechToTextPort,
    SynthesizedAudio, Transcription, TtsEnginePort,
};
use crate::domain::conversation::ConversationMessage;
use crate::infrastructure::adapters::http_support::{ensure_success, map_send_error};

const SERVICE_NAME: &str = "Z.ai service";

// ============================================================================
// 请求 / 响应结构
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ConversationMessage],
    thinking: Thinking,
}

#[derive(Debug, Serialize)]
struct Thinking {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    prompt: &'a str,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    base64: Option<String>,
}

#[derive(Debug, Serialize)]
struct AsrRequest<'a> {
    file_base64: &'a str,
}

#[derive(Debug, Deserialize)]
struct AsrResponse {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    input: &'a str,
    voice: &'a str,
    speed: f32,
    response_format: &'static str,
    stream: bool,
}

// ============================================================================
// Client
// ============================================================================

/// Z.ai 客户端配置
#[derive(Debug, Clone)]
pub struct ZaiClientConfig {
    /// API 基础 URL（包含版本前缀，如 https://host/api/v1）
    pub base_url: String,
    pub api_key: String,
    /// 可选的 X-Chat-Id 头
    pub chat_id: Option<String>,
    /// 可选的 X-User-Id 头
    pub user_id: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ZaiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/v1".to_string(),
            api_key: String::new(),
            chat_id: None,
            user_id: None,
            timeout_secs: 120,
        }
    }
}

impl ZaiClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Z.ai HTTP 客户端
pub struct ZaiClient {
    client: Client,
    config: ZaiClientConfig,
}

impl ZaiClient {
    pub fn new(config: ZaiClientConfig) -> Result<Self, AiServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiServiceError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// 构造带鉴权头的 POST 请求
    fn post(&self, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.config.api_key)
            .header("X-Z-AI-From", "Z");
        if let Some(chat_id) = &self.config.chat_id {
            builder = builder.header("X-Chat-Id", chat_id);
        }
        if let Some(user_id) = &self.config.user_id {
            builder = builder.header("X-User-Id", user_id);
        }
        builder
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, AiServiceError> {
        tracing::debug!(url = %self.url(path), "Sending Z.ai request");

        let response = self
            .post(path)
            .json(body)
            .send()
            .await
            .map_err(|e| map_send_error(SERVICE_NAME, e))?;

        ensure_success(response).await
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AiServiceError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AiServiceError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ChatCompletionPort for ZaiClient {
    async fn complete(
        &self,
        messages: &[ConversationMessage],
    ) -> Result<ChatCompletion, AiServiceError> {
        let request = ChatRequest {
            messages,
            thinking: Thinking { kind: "disabled" },
        };
        let response = self.send_json("/chat/completions", &request).await?;
        let body: ChatResponse = Self::read_json(response).await?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);

        tracing::info!(
            messages = messages.len(),
            reply_len = content.as_ref().map(|c| c.len()).unwrap_or(0),
            "Chat completion finished"
        );

        Ok(ChatCompletion { content })
    }
}

#[async_trait]
impl ImageGenerationPort for ZaiClient {
    async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<GeneratedImage, AiServiceError> {
        let body = ImageRequest {
            prompt: request.prompt.as_str(),
            size: request.size.as_str(),
        };
        let response = self.send_json("/images/generations", &body).await?;
        let body: ImageResponse = Self::read_json(response).await?;

        let base64 = body.data.into_iter().next().and_then(|d| d.base64);

        tracing::info!(
            size = %request.size,
            image_len = base64.as_ref().map(|b| b.len()).unwrap_or(0),
            "Image generation finished"
        );

        Ok(GeneratedImage { base64 })
    }
}

#[async_trait]
impl SpeechToTextPort for ZaiClient {
    async fn transcribe(&self, audio_base64: &str) -> Result<Transcription, AiServiceError> {
        let body = AsrRequest {
            file_base64: audio_base64,
        };
        let response = self.send_json("/audio/asr", &body).await?;
        let body: AsrResponse = Self::read_json(response).await?;

        tracing::info!(
            text_len = body.text.as_ref().map(|t| t.len()).unwrap_or(0),
            "Transcription finished"
        );

        Ok(Transcription { text: body.text })
    }
}

#[async_trait]
impl TtsEnginePort for ZaiClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedAudio, AiServiceError> {
        let body = TtsRequest {
            input: request.text.as_str(),
            voice: &request.voice_id,
            speed: request.speed.value(),
            response_format: AudioFormat::Wav.extension(),
            stream: false,
        };
        let response = self.send_json("/audio/tts", &body).await?;

        let data = response
            .bytes()
            .await
            .map_err(|e| AiServiceError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice = %request.voice_id,
            audio_size = data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            data,
            format: AudioFormat::Wav,
        })
    }
}
