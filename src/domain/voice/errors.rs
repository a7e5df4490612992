//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VoiceError {
    #[error("Text is required")]
    MissingText,

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Speed must be a number between 0.5 and 2.0")]
    InvalidSpeed,

    #[error("Invalid voice: {0}")]
    InvalidVoice(String),

    #[error("Audio data is required and must be a base64 string")]
    MissingAudio,
}
