//! Conversation Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Message is required and must be a string")]
    MissingMessage,

    #[error("Message cannot be empty")]
    EmptyMessage,
}
