//! HTTP Handlers

mod chat;
mod image;
mod ping;
mod speech;
mod voices;

pub use chat::*;
pub use image::*;
pub use ping::*;
pub use speech::*;
pub use voices::*;
