//! Voice Context - Value Objects

use super::VoiceError;

/// TTS 单次请求最大字符数，超出部分截断
pub const MAX_TEXT_LENGTH: usize = 1024;

/// 待合成文本
///
/// 不变量:
/// - 已 trim，非空
/// - 字符数 <= MAX_TEXT_LENGTH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn new(raw: &str) -> Result<Self, VoiceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VoiceError::EmptyText);
        }

        let text = match trimmed.char_indices().nth(MAX_TEXT_LENGTH) {
            Some((byte_idx, _)) => &trimmed[..byte_idx],
            None => trimmed,
        };
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 字符数
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// 语速 (0.5 - 2.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechSpeed(f32);

impl SpeechSpeed {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 2.0;

    pub fn new(speed: f64) -> Result<Self, VoiceError> {
        if !(f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&speed) {
            return Err(VoiceError::InvalidSpeed);
        }
        Ok(Self(speed as f32))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for SpeechSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

/// 待识别音频（纯 base64，已去掉 data URL 前缀）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload(String);

impl AudioPayload {
    const DATA_URL_MARKER: &'static str = "base64,";

    /// 接受纯 base64 或 `data:audio/webm;base64,...` 形式
    pub fn new(raw: &str) -> Result<Self, VoiceError> {
        let data = raw
            .split_once(Self::DATA_URL_MARKER)
            .map_or(raw, |(_, data)| data)
            .trim();
        if data.is_empty() {
            return Err(VoiceError::MissingAudio);
        }
        Ok(Self(data.to_string()))
    }

    pub fn as_base64(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trimmed() {
        let text = SpeechText::new("  hello  ").unwrap();
        assert_eq!(text.as_str(), "hello");
    }

    #[test]
    fn test_blank_text_rejected() {
        assert_eq!(SpeechText::new(" \n "), Err(VoiceError::EmptyText));
    }

    #[test]
    fn test_long_text_truncated_by_chars() {
        // 多字节字符按字符计数截断
        let raw = "语".repeat(MAX_TEXT_LENGTH + 10);
        let text = SpeechText::new(&raw).unwrap();
        assert_eq!(text.char_count(), MAX_TEXT_LENGTH);

        let exact = "a".repeat(MAX_TEXT_LENGTH);
        assert_eq!(SpeechText::new(&exact).unwrap().char_count(), MAX_TEXT_LENGTH);
    }

    #[test]
    fn test_speed_range() {
        assert!(SpeechSpeed::new(0.5).is_ok());
        assert!(SpeechSpeed::new(1.25).is_ok());
        assert!(SpeechSpeed::new(2.0).is_ok());
        assert_eq!(SpeechSpeed::new(0.49), Err(VoiceError::InvalidSpeed));
        assert_eq!(SpeechSpeed::new(2.01), Err(VoiceError::InvalidSpeed));
        assert_eq!(SpeechSpeed::new(f64::NAN), Err(VoiceError::InvalidSpeed));
        assert_eq!(SpeechSpeed::default().value(), 1.0);
    }

    #[test]
    fn test_audio_payload_strips_data_url_prefix() {
        let payload = AudioPayload::new("data:audio/webm;base64,UklGRg==").unwrap();
        assert_eq!(payload.as_base64(), "UklGRg==");

        let plain = AudioPayload::new("UklGRg==").unwrap();
        assert_eq!(plain.as_base64(), "UklGRg==");
    }

    #[test]
    fn test_empty_audio_payload_rejected() {
        assert_eq!(AudioPayload::new(""), Err(VoiceError::MissingAudio));
        assert_eq!(
            AudioPayload::new("data:audio/wav;base64,"),
            Err(VoiceError::MissingAudio)
        );
    }
}
