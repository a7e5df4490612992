//! Voice Query Handlers

use crate::application::queries::ListVoices;
use crate::domain::voice::{all_voices, Voice};

// ============================================================================
// Response DTOs
// ============================================================================

/// 音色摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSummary {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub language: String,
    /// 所属目录: zai / openai
    pub catalog: String,
}

impl From<&Voice> for VoiceSummary {
    fn from(voice: &Voice) -> Self {
        Self {
            id: voice.id.to_string(),
            name: voice.name.to_string(),
            gender: voice.gender.as_str().to_string(),
            language: voice.language.to_string(),
            catalog: voice.catalog.as_str().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListVoices Handler
///
/// 音色目录是静态的，不依赖任何端口
#[derive(Debug, Default)]
pub struct ListVoicesHandler;

impl ListVoicesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: ListVoices) -> Vec<VoiceSummary> {
        all_voices().map(VoiceSummary::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_voices_covers_both_catalogs() {
        let voices = ListVoicesHandler::new().handle(ListVoices);
        assert!(voices.iter().any(|v| v.catalog == "zai"));
        assert!(voices.iter().any(|v| v.catalog == "openai"));

        let kazi = voices.iter().find(|v| v.id == "kazi").unwrap();
        assert_eq!(kazi.gender, "male");
        assert_eq!(kazi.language, "en");
    }
}
