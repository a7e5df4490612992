//! Image Context - Value Objects

use std::fmt;
use std::str::FromStr;

use super::ImageError;

/// 图像尺寸（宽x高）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Square1024,
    Portrait768x1344,
    Portrait864x1152,
    Landscape1344x768,
    Landscape1152x864,
    Wide1440x720,
    Tall720x1440,
}

impl ImageSize {
    pub const ALL: [ImageSize; 7] = [
        Self::Square1024,
        Self::Portrait768x1344,
        Self::Portrait864x1152,
        Self::Landscape1344x768,
        Self::Landscape1152x864,
        Self::Wide1440x720,
        Self::Tall720x1440,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square1024 => "1024x1024",
            Self::Portrait768x1344 => "768x1344",
            Self::Portrait864x1152 => "864x1152",
            Self::Landscape1344x768 => "1344x768",
            Self::Landscape1152x864 => "1152x864",
            Self::Wide1440x720 => "1440x720",
            Self::Tall720x1440 => "720x1440",
        }
    }

    /// 逗号分隔的尺寸列表（用于错误提示）
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ImageSize {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ImageError::UnsupportedSize(s.to_string()))
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 图像提示词（已 trim，非空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt(String);

impl ImagePrompt {
    pub fn new(raw: &str) -> Result<Self, ImageError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ImageError::EmptyPrompt);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
