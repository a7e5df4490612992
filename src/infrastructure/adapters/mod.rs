//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fake;
pub mod tts;
pub mod zai;

mod http_support;

pub use fake::*;
pub use tts::*;
pub use zai::*;
