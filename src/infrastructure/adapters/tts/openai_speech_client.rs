//! OpenAI-compatible Speech Client - 调用 OpenAI 兼容的 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通常指向本地部署的 TTS 服务（如 Kokoro）
//!
//! 外部 TTS API:
//! POST {base}/audio/speech
//! Request: {"model": "...", "input": "...", "voice": "...", "response_format": "mp3", "speed": 1.0}
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{
    AiServiceError, AudioFormat, SpeechRequest, SynthesizedAudio, TtsEnginePort,
};
use crate::infrastructure::adapters::http_support::{ensure_success, map_send_error};

const SERVICE_NAME: &str = "OpenAI-compatible TTS service";

/// TTS 请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
    speed: f32,
}

/// OpenAI 兼容 TTS 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiSpeechClientConfig {
    /// 服务基础 URL（包含 /v1）
    pub base_url: String,
    /// 本地服务通常不需要
    pub api_key: Option<String>,
    /// 模型名
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiSpeechClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173/v1".to_string(),
            api_key: None,
            model: "kokoro".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OpenAiSpeechClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI 兼容 TTS 客户端
pub struct OpenAiSpeechClient {
    client: Client,
    config: OpenAiSpeechClientConfig,
}

impl OpenAiSpeechClient {
    /// 创建新的客户端
    pub fn new(config: OpenAiSpeechClientConfig) -> Result<Self, AiServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiServiceError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TtsEnginePort for OpenAiSpeechClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedAudio, AiServiceError> {
        let http_request = SpeechHttpRequest {
            model: &self.config.model,
            input: request.text.as_str(),
            voice: &request.voice_id,
            response_format: AudioFormat::Mp3.extension(),
            speed: request.speed.value(),
        };

        tracing::debug!(
            url = %self.speech_url(),
            model = %self.config.model,
            voice = %request.voice_id,
            text_len = request.text.char_count(),
            "Sending OpenAI-compatible speech request"
        );

        let mut builder = self.client.post(self.speech_url()).json(&http_request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_send_error(SERVICE_NAME, e))?;
        let response = ensure_success(response).await?;

        // 直接获取音频字节
        let data = response
            .bytes()
            .await
            .map_err(|e| AiServiceError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice = %request.voice_id,
            audio_size = data.len(),
            "OpenAI-compatible speech synthesis completed"
        );

        Ok(SynthesizedAudio {
            data,
            format: AudioFormat::Mp3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::{SpeechSpeed, SpeechText};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(voice: &str) -> SpeechRequest {
        SpeechRequest {
            text: SpeechText::new("good morning").unwrap(),
            voice_id: voice.to_string(),
            speed: SpeechSpeed::new(1.25).unwrap(),
        }
    }

    #[test]
    fn test_config_default() {
        let config = OpenAiSpeechClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5173/v1");
        assert_eq!(config.model, "kokoro");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = OpenAiSpeechClientConfig::new("http://tts:8880/v1")
            .with_model("tts-1")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://tts:8880/v1");
        assert_eq!(config.model, "tts-1");
        assert_eq!(config.timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_synthesize_sends_model_and_voice() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/audio/speech"))
            .and(header("authorization", "Bearer local-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "kokoro",
                "input": "good morning",
                "voice": "af_heart",
                "response_format": "mp3",
                "speed": 1.25
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(b"ID3\x04".to_vec()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut config = OpenAiSpeechClientConfig::new(format!("{}/v1", server.uri()));
        config.api_key = Some("local-key".to_string());
        let client = OpenAiSpeechClient::new(config).unwrap();

        let audio = client.synthesize(request("af_heart")).await.unwrap();
        assert_eq!(audio.format, AudioFormat::Mp3);
        assert_eq!(audio.data, b"ID3\x04".to_vec());
    }

    #[tokio::test]
    async fn test_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/audio/speech"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "unknown voice"})),
            )
            .mount(&server)
            .await;

        let client =
            OpenAiSpeechClient::new(OpenAiSpeechClientConfig::new(format!("{}/v1", server.uri())))
                .unwrap();
        let err = client.synthesize(request("am_adam")).await.unwrap_err();
        assert_eq!(err.to_string(), "Service error: HTTP 400 Bad Request: unknown voice");
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let client =
            OpenAiSpeechClient::new(OpenAiSpeechClientConfig::new("http://127.0.0.1:1/v1")).unwrap();
        let err = client.synthesize(request("am_adam")).await.unwrap_err();
        match err {
            AiServiceError::NetworkError(msg) => assert!(msg.contains(SERVICE_NAME)),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
