//! Data Transfer Objects
//!
//! 请求体字段统一先解析为 serde_json::Value，由 handler 做类型判断，
//! 这样类型错误也能返回固定的 400 文案

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::VoiceSummary;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一成功响应格式: {"success": true, ...data}
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// 字段解析
// ============================================================================

/// 字段类型不符合预期
#[derive(Debug, Clone, PartialEq)]
pub struct WrongType(pub Value);

/// 只接受字符串，其余（含缺失）视为 None
pub fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// 可选字符串：缺失或 null 为 None，其他类型报错
pub fn optional_string_field(value: Option<Value>) -> Result<Option<String>, WrongType> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(WrongType(other)),
    }
}

/// 可选数字：缺失或 null 为 None，其他类型报错
pub fn optional_number_field(value: Option<Value>) -> Result<Option<f64>, WrongType> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(WrongType(Value::Number(n))),
        Some(other) => Err(WrongType(other)),
    }
}

// ============================================================================
// Chat DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Image DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub image: String,
    pub prompt: String,
    pub size: String,
}

// ============================================================================
// Speech DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    #[serde(default)]
    pub audio: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub voice: Option<Value>,
    #[serde(default)]
    pub speed: Option<Value>,
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub language: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<VoiceSummary> for VoiceResponse {
    fn from(v: VoiceSummary) -> Self {
        Self {
            id: v.id,
            name: v.name,
            gender: v.gender,
            language: v.language,
            kind: v.catalog,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceResponse>,
}
