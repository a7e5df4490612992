//! Image Context - Errors

use thiserror::Error;

use super::ImageSize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Prompt is required and must be a string")]
    MissingPrompt,

    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Invalid size. Supported sizes: {}", ImageSize::supported_list())]
    UnsupportedSize(String),
}
