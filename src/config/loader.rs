//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml，或 VOXCHAT_CONFIG 指定的文件）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::{AiProvider, AppConfig};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "VOXCHAT";

/// 显式指定配置文件的环境变量
const CONFIG_PATH_ENV: &str = "VOXCHAT_CONFIG";

/// API 路由前缀，静态文件不能挂在其下
const API_PREFIX: &str = "/api";

/// 会话空闲过期时间上限（30 天）
const MAX_SESSION_EXPIRE_SECS: u64 = 30 * 24 * 3600;

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOXCHAT_`，层级分隔符 `__`）
/// 2. 配置文件（`VOXCHAT_CONFIG` 指定的文件，否则搜索 config.toml / config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOXCHAT_SERVER__PORT=8080`
/// - `VOXCHAT_AI__PROVIDER=fake`
/// - `VOXCHAT_ZAI__BASE_URL=https://api.example.com/v1`
/// - `VOXCHAT_ZAI__API_KEY=sk-...`
/// - `VOXCHAT_OPENAI_TTS__BASE_URL=http://kokoro:8880/v1`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_config_from_path(explicit.as_deref())
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.max_body_bytes", 25 * 1024 * 1024)?
        .set_default("ai.provider", "zai")?
        .set_default("zai.timeout_secs", 120)?
        .set_default("openai_tts.base_url", "http://localhost:5173/v1")?
        .set_default("openai_tts.model", "kokoro")?
        .set_default("openai_tts.timeout_secs", 10)?
        .set_default("gc.enabled", true)?
        .set_default("gc.interval_secs", 600)?
        .set_default("gc.session_expire_secs", 3600)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.ai.provider == AiProvider::Zai && config.zai.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "zai.base_url cannot be empty when ai.provider is zai".to_string(),
        ));
    }

    if config.openai_tts.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "openai_tts.base_url cannot be empty".to_string(),
        ));
    }

    if config.chat.max_history < 2 {
        return Err(ConfigError::ValidationError(
            "chat.max_history must be at least 2".to_string(),
        ));
    }

    if config.chat.system_prompt.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "chat.system_prompt cannot be empty".to_string(),
        ));
    }

    if config.gc.enabled && config.gc.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "GC interval cannot be 0 when GC is enabled".to_string(),
        ));
    }

    if config.gc.enabled && config.gc.session_expire_secs > MAX_SESSION_EXPIRE_SECS {
        return Err(ConfigError::ValidationError(format!(
            "gc.session_expire_secs cannot exceed {}",
            MAX_SESSION_EXPIRE_SECS
        )));
    }

    if config.server.static_files.enabled {
        validate_static_path(&config.server.static_files.path)?;
    }

    Ok(())
}

/// 静态文件挂载路径: "/" 或以 "/" 开头、不含通配符、不与 /api 冲突的前缀
fn validate_static_path(path: &str) -> Result<(), ConfigError> {
    if path == "/" {
        return Ok(());
    }

    let invalid = |reason: &str| {
        Err(ConfigError::ValidationError(format!(
            "server.static_files.path '{}' {}",
            path, reason
        )))
    };

    if !path.starts_with('/') {
        return invalid("must start with '/'");
    }
    if path.ends_with('/') {
        return invalid("must not end with '/'");
    }
    if path.contains(['*', ':', '{', '}']) {
        return invalid("must not contain route parameters or wildcards");
    }
    if path == API_PREFIX || path.starts_with(&format!("{}/", API_PREFIX)) {
        return invalid("conflicts with the API routes");
    }

    Ok(())
}

/// 遮蔽密钥，只保留前 4 个字符
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", prefix)
    }
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Max Body: {} bytes", config.server.max_body_bytes);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} -> {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("Max History: {}", config.chat.max_history);
    tracing::info!("AI Provider: {}", config.ai.provider.as_str());
    if config.ai.provider == AiProvider::Zai {
        tracing::info!("Z.ai URL: {}", config.zai.base_url);
        tracing::info!("Z.ai API Key: {}", mask_secret(&config.zai.api_key));
        tracing::info!("Z.ai Timeout: {}s", config.zai.timeout_secs);
    }
    tracing::info!("OpenAI TTS URL: {}", config.openai_tts.base_url);
    tracing::info!(
        "OpenAI TTS API Key: {}",
        mask_secret(config.openai_tts.api_key.as_deref().unwrap_or_default())
    );
    tracing::info!("OpenAI TTS Model: {}", config.openai_tts.model);
    tracing::info!("GC Enabled: {}", config.gc.enabled);
    if config.gc.enabled {
        tracing::info!("GC Interval: {}s", config.gc.interval_secs);
        tracing::info!("Session Expire: {}s", config.gc.session_expire_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_small_history() {
        let mut config = AppConfig::default();
        config.chat.max_history = 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_prompt() {
        let mut config = AppConfig::default();
        config.chat.system_prompt = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_zai_url_only_matters_for_zai() {
        let mut config = AppConfig::default();
        config.zai.base_url = String::new();
        assert!(validate_config(&config).is_err());

        config.ai.provider = AiProvider::Fake;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_gc_interval() {
        let mut config = AppConfig::default();
        config.gc.interval_secs = 0;
        assert!(validate_config(&config).is_err());

        config.gc.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_huge_session_expire() {
        let mut config = AppConfig::default();
        config.gc.session_expire_secs = u64::MAX;
        assert!(validate_config(&config).is_err());

        config.gc.session_expire_secs = MAX_SESSION_EXPIRE_SECS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_static_path_validation() {
        let mut config = AppConfig::default();
        config.server.static_files.enabled = true;

        for path in ["/", "/ui", "/static/app"] {
            config.server.static_files.path = path.to_string();
            assert!(validate_config(&config).is_ok(), "path: {}", path);
        }

        for path in ["ui", "", "/ui/", "/api", "/api/ui", "/:id", "/*rest"] {
            config.server.static_files.path = path.to_string();
            assert!(
                matches!(validate_config(&config), Err(ConfigError::ValidationError(_))),
                "path: {}",
                path
            );
        }

        // 未启用时不校验
        config.server.static_files.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("short"), "****");
        assert_eq!(mask_secret("sk-abcdefghijkl"), "sk-a****");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voxchat.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8088

[chat]
max_history = 8

[ai]
provider = "fake"

[openai_tts]
model = "tts-1"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.chat.max_history, 8);
        assert_eq!(config.ai.provider, AiProvider::Fake);
        assert_eq!(config.openai_tts.model, "tts-1");
        // 未配置的字段使用默认值
        assert_eq!(config.openai_tts.timeout_secs, 10);
        assert!(config.gc.enabled);
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chat]\nmax_history = 1\n").unwrap();

        let err = load_config_from_path(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(load_config_from_path(Some(&path)).is_err());
    }
}
