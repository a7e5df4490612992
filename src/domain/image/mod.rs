//! Image Context - 图像生成上下文
//!
//! 职责:
//! - 提示词校验
//! - 支持的图像尺寸枚举

mod errors;
mod value_objects;

pub use errors::ImageError;
pub use value_objects::{ImagePrompt, ImageSize};
