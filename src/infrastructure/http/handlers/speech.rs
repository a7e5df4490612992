//! Speech HTTP Handlers
//!
//! - transcribe: 语音识别，返回 JSON
//! - text_to_speech: 语音合成，直接返回音频二进制

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{SynthesizeSpeech, TranscribeAudio};
use crate::domain::voice::VoiceError;
use crate::infrastructure::http::dto::{
    optional_number_field, optional_string_field, string_field, ApiResponse, TranscribeRequest,
    TranscriptionResponse, TtsRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// 语音识别
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<TranscribeRequest>,
) -> Result<Json<ApiResponse<TranscriptionResponse>>, ApiError> {
    let command = TranscribeAudio {
        audio: string_field(req.audio),
    };

    let result = state.transcribe_audio_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(TranscriptionResponse {
        transcription: result.transcription,
    })))
}

/// 语音合成
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<TtsRequest>,
) -> Result<Response, ApiError> {
    let speed = optional_number_field(req.speed)
        .map_err(|_| ApiError::BadRequest(VoiceError::InvalidSpeed.to_string()))?;
    let voice = optional_string_field(req.voice).map_err(|wrong| {
        ApiError::BadRequest(VoiceError::InvalidVoice(wrong.0.to_string()).to_string())
    })?;

    let command = SynthesizeSpeech {
        text: string_field(req.text),
        voice,
        speed,
    };

    let result = state.synthesize_speech_handler.handle(command).await?;
    let audio = result.audio;

    tracing::info!(
        voice = %result.voice_id,
        format = audio.format.extension(),
        bytes = audio.data.len(),
        "Speech synthesized"
    );

    Ok((
        [
            (header::CONTENT_TYPE, audio.format.content_type().to_string()),
            (header::CONTENT_LENGTH, audio.data.len().to_string()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        audio.data,
    )
        .into_response())
}
