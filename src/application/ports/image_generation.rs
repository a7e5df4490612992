//! Image Generation Port - 文生图服务抽象

use async_trait::async_trait;

use super::AiServiceError;
use crate::domain::image::{ImagePrompt, ImageSize};

/// 图像生成请求
#[derive(Debug, Clone)]
pub struct ImageGenerationRequest {
    pub prompt: ImagePrompt,
    pub size: ImageSize,
}

/// 图像生成结果（PNG 的 base64，不含 data URL 前缀）
#[derive(Debug, Clone, Default)]
pub struct GeneratedImage {
    pub base64: Option<String>,
}

/// Image Generation Port
#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest)
        -> Result<GeneratedImage, AiServiceError>;
}
