//! Voxchat - 语音/图像对话网关
//!
//! - Domain: conversation/, voice/, image/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, worker, adapters

use std::sync::Arc;

use voxchat::config::{load_config, print_config, AiProvider, AppConfig};
use voxchat::infrastructure::adapters::{
    FakeAiClient, FakeAiClientConfig, OpenAiSpeechClient, OpenAiSpeechClientConfig, ZaiClient,
    ZaiClientConfig,
};
use voxchat::infrastructure::http::{
    AiProviders, AppState, HttpServer, ServerConfig, StaticFilesConfig,
};
use voxchat::infrastructure::memory::InMemoryConversationStore;
use voxchat::infrastructure::worker::{ConversationGcConfig, ConversationGcWorker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Voxchat - 语音/图像对话网关");
    print_config(&config);

    let providers = build_providers(&config)?;

    // 按会话划分的内存对话存储
    let conversation_store =
        InMemoryConversationStore::new(&config.chat.system_prompt, config.chat.max_history).arc();

    // 启动空闲会话回收
    if config.gc.enabled {
        let gc_worker = ConversationGcWorker::new(
            ConversationGcConfig {
                interval_secs: config.gc.interval_secs,
                session_expire_secs: config.gc.session_expire_secs,
            },
            conversation_store.clone(),
        );
        tokio::spawn(gc_worker.run());
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        max_body_bytes: config.server.max_body_bytes,
        static_files: StaticFilesConfig {
            enabled: config.server.static_files.enabled,
            dir: config.server.static_files.dir.clone(),
            path: config.server.static_files.path.clone(),
        },
    };
    let state = AppState::new(conversation_store, providers);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},voxchat={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

/// 按配置创建外部 AI 服务客户端
fn build_providers(config: &AppConfig) -> anyhow::Result<AiProviders> {
    // OpenAI 兼容 TTS 与 provider 选择无关
    let openai_tts = Arc::new(OpenAiSpeechClient::new(
        OpenAiSpeechClientConfig {
            base_url: config.openai_tts.base_url.clone(),
            api_key: config.openai_tts.api_key.clone(),
            model: config.openai_tts.model.clone(),
            timeout_secs: config.openai_tts.timeout_secs,
        },
    )?);

    let providers = match config.ai.provider {
        AiProvider::Zai => {
            let zai = Arc::new(ZaiClient::new(ZaiClientConfig {
                base_url: config.zai.base_url.clone(),
                api_key: config.zai.api_key.clone(),
                chat_id: config.zai.chat_id.clone(),
                user_id: config.zai.user_id.clone(),
                timeout_secs: config.zai.timeout_secs,
            })?);
            AiProviders {
                chat: zai.clone(),
                images: zai.clone(),
                speech_to_text: zai.clone(),
                primary_tts: zai,
                openai_tts,
            }
        }
        AiProvider::Fake => {
            tracing::warn!("Using fake AI provider, no external service will be called");
            let fake = Arc::new(FakeAiClient::new(FakeAiClientConfig::default()));
            AiProviders {
                chat: fake.clone(),
                images: fake.clone(),
                speech_to_text: fake.clone(),
                primary_tts: fake,
                openai_tts,
            }
        }
    };

    Ok(providers)
}
