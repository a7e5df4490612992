//! Image Commands - 图像生成命令

/// 生成图像命令
#[derive(Debug, Clone)]
pub struct GenerateImage {
    pub prompt: Option<String>,
    /// None 时使用默认尺寸 1024x1024
    pub size: Option<String>,
}

/// 生成图像响应
#[derive(Debug, Clone)]
pub struct GenerateImageResponse {
    /// data:image/png;base64,...
    pub image: String,
    /// trim 后的提示词
    pub prompt: String,
    pub size: String,
}
