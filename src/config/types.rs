//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::conversation::DEFAULT_MAX_HISTORY;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 对话配置
    #[serde(default)]
    pub chat: ChatConfig,

    /// AI 服务选择
    #[serde(default)]
    pub ai: AiConfig,

    /// 托管 AI 服务配置
    #[serde(default)]
    pub zai: ZaiConfig,

    /// OpenAI 兼容 TTS 配置
    #[serde(default)]
    pub openai_tts: OpenAiTtsConfig,

    /// GC 配置
    #[serde(default)]
    pub gc: GcConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（如 "/" 表示根路径托管）
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_static_path() -> String {
    "/".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    25 * 1024 * 1024 // 25 MB，录音的 base64 可能较大
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

/// 对话配置
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// 固定的 system prompt，始终位于历史首位
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// 每个会话保留的最大消息数（含 system prompt）
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_system_prompt() -> String {
    "You are a helpful voice assistant. Keep answers short and conversational.".to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            max_history: default_max_history(),
        }
    }
}

/// AI 服务提供方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    /// 托管 AI 服务
    #[default]
    Zai,
    /// 离线假实现
    Fake,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Zai => "zai",
            AiProvider::Fake => "fake",
        }
    }
}

/// AI 服务选择
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProvider,
}

/// 托管 AI 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ZaiConfig {
    /// API 基础 URL
    #[serde(default = "default_zai_base_url")]
    pub base_url: String,

    /// API Key
    #[serde(default)]
    pub api_key: String,

    /// 可选的 X-Chat-Id
    #[serde(default)]
    pub chat_id: Option<String>,

    /// 可选的 X-User-Id
    #[serde(default)]
    pub user_id: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_zai_timeout")]
    pub timeout_secs: u64,
}

fn default_zai_base_url() -> String {
    "http://localhost:8080/v1".to_string()
}

fn default_zai_timeout() -> u64 {
    120
}

impl Default for ZaiConfig {
    fn default() -> Self {
        Self {
            base_url: default_zai_base_url(),
            api_key: String::new(),
            chat_id: None,
            user_id: None,
            timeout_secs: default_zai_timeout(),
        }
    }
}

/// OpenAI 兼容 TTS 配置
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiTtsConfig {
    /// API 基础 URL
    #[serde(default = "default_openai_tts_base_url")]
    pub base_url: String,

    /// 可选的 API Key
    #[serde(default)]
    pub api_key: Option<String>,

    /// 模型名称
    #[serde(default = "default_openai_tts_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_openai_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_openai_tts_base_url() -> String {
    "http://localhost:5173/v1".to_string()
}

fn default_openai_tts_model() -> String {
    "kokoro".to_string()
}

fn default_openai_tts_timeout() -> u64 {
    10
}

impl Default for OpenAiTtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_tts_base_url(),
            api_key: None,
            model: default_openai_tts_model(),
            timeout_secs: default_openai_tts_timeout(),
        }
    }
}

/// GC（垃圾回收）配置
#[derive(Debug, Clone, Deserialize)]
pub struct GcConfig {
    /// 是否启用自动 GC
    #[serde(default = "default_gc_enabled")]
    pub enabled: bool,

    /// GC 间隔时间（秒）
    #[serde(default = "default_gc_interval")]
    pub interval_secs: u64,

    /// 会话空闲过期时间（秒）
    #[serde(default = "default_session_expire")]
    pub session_expire_secs: u64,
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    600 // 10 分钟
}

fn default_session_expire() -> u64 {
    3600 // 1 小时
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            enabled: default_gc_enabled(),
            interval_secs: default_gc_interval(),
            session_expire_secs: default_session_expire(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
