//! 应用层 - 命令（写操作 / 外部服务调用）
//!
//! CQRS 命令侧

mod chat_commands;
mod image_commands;
mod speech_commands;

pub mod handlers;

pub use chat_commands::*;
pub use image_commands::*;
pub use speech_commands::*;
