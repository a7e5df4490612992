//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderName;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::extract::SESSION_HEADER;
use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 静态文件托管配置（前端构建产物）
#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    pub enabled: bool,
    pub dir: PathBuf,
    /// 挂载路径，"/" 表示作为 fallback
    pub path: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: PathBuf::from("web"),
            path: "/".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 请求体大小上限（音频 base64 较大）
    pub max_body_bytes: usize,
    pub static_files: StaticFilesConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 25 * 1024 * 1024,
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建 Router
pub fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    // CORS 配置 - 允许所有来源的跨域请求
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static(SESSION_HEADER),
        ])
        .expose_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let mut router = create_routes();

    let static_files = &config.static_files;
    if static_files.enabled {
        info!(
            dir = %static_files.dir.display(),
            path = %static_files.path,
            "Serving static files"
        );
        let serve_dir = ServeDir::new(&static_files.dir);
        router = if static_files.path == "/" {
            router.fallback_service(serve_dir)
        } else {
            router.nest_service(&static_files.path, serve_dir)
        };
    }

    router
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(&self.config, self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}
