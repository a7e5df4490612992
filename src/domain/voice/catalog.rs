//! Voice Context - Catalog
//!
//! 两个互不相交的静态音色集合：
//! - PRIMARY_VOICES: 托管 AI 服务自带的 TTS 音色
//! - OPENAI_VOICES: 本地 OpenAI 兼容 TTS 服务（/audio/speech）的美式英语音色

/// 未指定音色时使用的默认音色
pub const DEFAULT_VOICE_ID: &str = "kazi";

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// 音色所属目录，决定 TTS 请求路由到哪个服务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCatalog {
    Primary,
    OpenAiCompatible,
}

impl VoiceCatalog {
    /// 对外暴露的 type 字段
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "zai",
            Self::OpenAiCompatible => "openai",
        }
    }
}

/// 音色（不可变，静态枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub gender: Gender,
    pub language: &'static str,
    pub catalog: VoiceCatalog,
}

const fn primary(id: &'static str, name: &'static str, gender: Gender, language: &'static str) -> Voice {
    Voice {
        id,
        name,
        gender,
        language,
        catalog: VoiceCatalog::Primary,
    }
}

const fn openai(id: &'static str, name: &'static str, gender: Gender) -> Voice {
    Voice {
        id,
        name,
        gender,
        language: "en-US",
        catalog: VoiceCatalog::OpenAiCompatible,
    }
}

pub const PRIMARY_VOICES: &[Voice] = &[
    primary("tongtong", "Tongtong (温暖亲切)", Gender::Female, "zh"),
    primary("chuichui", "Chuichui (活泼可爱)", Gender::Female, "zh"),
    primary("xiaochen", "Xiaochen (沉稳专业)", Gender::Female, "zh"),
    primary("jam", "Jam (英音绅士)", Gender::Male, "en"),
    primary("kazi", "Kazi (清晰标准)", Gender::Male, "en"),
    primary("douji", "Douji (自然流畅)", Gender::Male, "en"),
    primary("luodo", "Luodo (富有感染力)", Gender::Male, "en"),
];

pub const OPENAI_VOICES: &[Voice] = &[
    openai("af_heart", "Heart (American)", Gender::Female),
    openai("af_bella", "Bella (American)", Gender::Female),
    openai("af_nicole", "Nicole (American)", Gender::Female),
    openai("af_sarah", "Sarah (American)", Gender::Female),
    openai("am_adam", "Adam (American)", Gender::Male),
    openai("am_michael", "Michael (American)", Gender::Male),
    openai("am_eric", "Eric (American)", Gender::Male),
];

/// 完整音色目录（主服务在前）
pub fn all_voices() -> impl Iterator<Item = &'static Voice> {
    PRIMARY_VOICES.iter().chain(OPENAI_VOICES.iter())
}

/// 按 id 查找音色
///
/// 先查 OpenAI 兼容集合，再查主集合
pub fn find_voice(id: &str) -> Option<&'static Voice> {
    OPENAI_VOICES
        .iter()
        .find(|v| v.id == id)
        .or_else(|| PRIMARY_VOICES.iter().find(|v| v.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: Vec<_> = all_voices().map(|v| v.id).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert!(!ids.is_empty());
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_catalogs_are_disjoint_and_tagged() {
        assert!(PRIMARY_VOICES.iter().all(|v| v.catalog == VoiceCatalog::Primary));
        assert!(OPENAI_VOICES
            .iter()
            .all(|v| v.catalog == VoiceCatalog::OpenAiCompatible));
        assert!(PRIMARY_VOICES
            .iter()
            .all(|p| OPENAI_VOICES.iter().all(|o| o.id != p.id)));
    }

    #[test]
    fn test_find_voice() {
        assert_eq!(find_voice("kazi").unwrap().catalog, VoiceCatalog::Primary);
        assert_eq!(
            find_voice("am_adam").unwrap().catalog,
            VoiceCatalog::OpenAiCompatible
        );
        assert!(find_voice("nobody").is_none());
        assert!(find_voice("").is_none());
    }

    #[test]
    fn test_default_voice_exists() {
        let voice = find_voice(DEFAULT_VOICE_ID).unwrap();
        assert_eq!(voice.catalog, VoiceCatalog::Primary);
        assert_eq!(voice.gender, Gender::Male);
    }
}
