//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod chat_handlers;
mod image_handlers;
mod speech_handlers;

pub use chat_handlers::*;
pub use image_handlers::*;
pub use speech_handlers::*;
