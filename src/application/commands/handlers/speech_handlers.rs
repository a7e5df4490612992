//! Speech Command Handlers
//!
//! - TranscribeAudio: 语音识别
//! - SynthesizeSpeech: 语音合成（按音色所属目录路由到主服务或 OpenAI 兼容服务）

use std::sync::Arc;

use crate::application::commands::{
    SynthesizeSpeech, SynthesizeSpeechResponse, TranscribeAudio, TranscribeAudioResponse,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechRequest, SpeechToTextPort, TtsEnginePort};
use crate::domain::voice::{
    find_voice, AudioPayload, SpeechSpeed, SpeechText, VoiceCatalog, VoiceError, DEFAULT_VOICE_ID,
};

// ============================================================================
// TranscribeAudio
// ============================================================================

/// TranscribeAudio Handler
pub struct TranscribeAudioHandler {
    stt: Arc<dyn SpeechToTextPort>,
}

impl TranscribeAudioHandler {
    pub fn new(stt: Arc<dyn SpeechToTextPort>) -> Self {
        Self { stt }
    }

    pub async fn handle(
        &self,
        command: TranscribeAudio,
    ) -> Result<TranscribeAudioResponse, ApplicationError> {
        let raw = command.audio.ok_or(VoiceError::MissingAudio)?;
        let payload = AudioPayload::new(&raw)?;

        tracing::debug!(payload_len = payload.as_base64().len(), "Transcribing audio");

        let result = self.stt.transcribe(payload.as_base64()).await?;
        let transcription = result
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ApplicationError::EmptyResult("Failed to transcribe audio"))?;

        Ok(TranscribeAudioResponse { transcription })
    }
}

// ============================================================================
// SynthesizeSpeech
// ============================================================================

/// SynthesizeSpeech Handler
///
/// 两个音色集合互不相交，一个请求只会到达其中一个服务
pub struct SynthesizeSpeechHandler {
    primary: Arc<dyn TtsEnginePort>,
    openai: Arc<dyn TtsEnginePort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(primary: Arc<dyn TtsEnginePort>, openai: Arc<dyn TtsEnginePort>) -> Self {
        Self { primary, openai }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let raw = command.text.ok_or(VoiceError::MissingText)?;
        let text = SpeechText::new(&raw)?;
        let speed = command
            .speed
            .map(SpeechSpeed::new)
            .transpose()?
            .unwrap_or_default();

        let voice_id = command.voice.unwrap_or_else(|| DEFAULT_VOICE_ID.to_string());
        let voice = find_voice(&voice_id).ok_or_else(|| VoiceError::InvalidVoice(voice_id.clone()))?;

        let engine = match voice.catalog {
            VoiceCatalog::OpenAiCompatible => &self.openai,
            VoiceCatalog::Primary => &self.primary,
        };

        tracing::info!(
            voice = %voice.id,
            catalog = voice.catalog.as_str(),
            text_len = text.char_count(),
            speed = speed.value(),
            "Synthesizing speech"
        );

        let audio = engine
            .synthesize(SpeechRequest {
                text,
                voice_id: voice.id.to_string(),
                speed,
            })
            .await?;

        if audio.data.is_empty() {
            return Err(ApplicationError::EmptyResult("Failed to synthesize speech"));
        }

        Ok(SynthesizeSpeechResponse {
            voice_id: voice.id.to_string(),
            audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::ports::{AiServiceError, AudioFormat, SynthesizedAudio, Transcription};

    struct StubTts {
        format: AudioFormat,
        data: Vec<u8>,
        seen: Mutex<Vec<SpeechRequest>>,
    }

    impl StubTts {
        fn new(format: AudioFormat, data: &[u8]) -> Arc<Self> {
            Arc::new(Self {
                format,
                data: data.to_vec(),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TtsEnginePort for StubTts {
        async fn synthesize(
            &self,
            request: SpeechRequest,
        ) -> Result<SynthesizedAudio, AiServiceError> {
            self.seen.lock().unwrap().push(request);
            Ok(SynthesizedAudio {
                data: self.data.clone(),
                format: self.format,
            })
        }
    }

    fn setup() -> (SynthesizeSpeechHandler, Arc<StubTts>, Arc<StubTts>) {
        let primary = StubTts::new(AudioFormat::Wav, b"RIFF");
        let openai = StubTts::new(AudioFormat::Mp3, b"ID3");
        let handler = SynthesizeSpeechHandler::new(primary.clone(), openai.clone());
        (handler, primary, openai)
    }

    fn speak(text: &str, voice: Option<&str>, speed: Option<f64>) -> SynthesizeSpeech {
        SynthesizeSpeech {
            text: Some(text.to_string()),
            voice: voice.map(str::to_string),
            speed,
        }
    }

    #[tokio::test]
    async fn test_primary_voice_routes_to_primary_only() {
        let (handler, primary, openai) = setup();

        let result = handler.handle(speak("hello", Some("tongtong"), None)).await.unwrap();
        assert_eq!(result.audio.format, AudioFormat::Wav);
        assert_eq!(result.voice_id, "tongtong");
        assert_eq!(primary.calls(), 1);
        assert_eq!(openai.calls(), 0);
    }

    #[tokio::test]
    async fn test_openai_voice_routes_to_openai_only() {
        let (handler, primary, openai) = setup();

        let result = handler
            .handle(speak("hello", Some("af_bella"), Some(1.5)))
            .await
            .unwrap();
        assert_eq!(result.audio.format, AudioFormat::Mp3);
        assert_eq!(primary.calls(), 0);
        assert_eq!(openai.calls(), 1);

        let seen = openai.seen.lock().unwrap();
        assert_eq!(seen[0].voice_id, "af_bella");
        assert_eq!(seen[0].speed.value(), 1.5);
    }

    #[tokio::test]
    async fn test_defaults_to_kazi_and_normal_speed() {
        let (handler, primary, _openai) = setup();

        handler
            .handle(SynthesizeSpeech {
                text: Some("hi".to_string()),
                voice: None,
                speed: None,
            })
            .await
            .unwrap();

        let seen = primary.seen.lock().unwrap();
        assert_eq!(seen[0].voice_id, DEFAULT_VOICE_ID);
        assert_eq!(seen[0].speed, SpeechSpeed::default());
    }

    #[tokio::test]
    async fn test_long_text_truncated_before_sending() {
        let (handler, primary, _openai) = setup();
        let long = "x".repeat(3000);

        handler.handle(speak(&long, None, None)).await.unwrap();
        assert_eq!(primary.seen.lock().unwrap()[0].text.char_count(), 1024);
    }

    #[tokio::test]
    async fn test_rejections_do_not_reach_any_service() {
        let (handler, primary, openai) = setup();

        let cases = [
            SynthesizeSpeech { text: None, voice: None, speed: None },
            speak("   ", None, None),
            speak("hi", None, Some(0.1)),
            speak("hi", None, Some(2.5)),
            speak("hi", Some("robot"), None),
        ];
        for command in cases {
            let err = handler.handle(command).await.unwrap_err();
            assert!(matches!(err, ApplicationError::ValidationError(_)));
        }

        let err = handler.handle(speak("hi", Some("robot"), None)).await.unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid voice: robot");

        assert_eq!(primary.calls() + openai.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_audio_is_server_error() {
        let primary = StubTts::new(AudioFormat::Wav, b"");
        let openai = StubTts::new(AudioFormat::Mp3, b"ID3");
        let handler = SynthesizeSpeechHandler::new(primary, openai);

        let err = handler.handle(speak("hi", None, None)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::EmptyResult(_)));
    }

    struct StubStt {
        text: Option<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SpeechToTextPort for StubStt {
        async fn transcribe(&self, audio_base64: &str) -> Result<Transcription, AiServiceError> {
            self.seen.lock().unwrap().push(audio_base64.to_string());
            Ok(Transcription {
                text: self.text.map(str::to_string),
            })
        }
    }

    #[tokio::test]
    async fn test_transcribe_strips_prefix_and_trims_result() {
        let stt = Arc::new(StubStt {
            text: Some("  what time is it \n"),
            seen: Mutex::new(Vec::new()),
        });
        let handler = TranscribeAudioHandler::new(stt.clone());

        let result = handler
            .handle(TranscribeAudio {
                audio: Some("data:audio/webm;base64,GkXfo0B=".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.transcription, "what time is it");
        assert_eq!(stt.seen.lock().unwrap()[0], "GkXfo0B=");
    }

    #[tokio::test]
    async fn test_transcribe_errors() {
        let stt = Arc::new(StubStt {
            text: Some("   "),
            seen: Mutex::new(Vec::new()),
        });
        let handler = TranscribeAudioHandler::new(stt.clone());

        let err = handler.handle(TranscribeAudio { audio: None }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert!(stt.seen.lock().unwrap().is_empty());

        let err = handler
            .handle(TranscribeAudio {
                audio: Some("AAAA".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::EmptyResult("Failed to transcribe audio")));
    }
}
