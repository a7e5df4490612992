//! Query Handlers 实现

mod voice_handlers;

pub use voice_handlers::*;
