//! Conversation GC Worker - 空闲会话回收

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ConversationStorePort;

/// GC Worker 配置
#[derive(Debug, Clone)]
pub struct ConversationGcConfig {
    /// 扫描间隔（秒）
    pub interval_secs: u64,
    /// 会话空闲超时（秒）
    pub session_expire_secs: u64,
}

impl Default for ConversationGcConfig {
    fn default() -> Self {
        Self {
            interval_secs: 600,
            session_expire_secs: 3600,
        }
    }
}

/// 空闲会话回收 Worker
///
/// 定期删除超过空闲时间的会话，防止会话数无限增长
pub struct ConversationGcWorker {
    config: ConversationGcConfig,
    store: Arc<dyn ConversationStorePort>,
}

impl ConversationGcWorker {
    pub fn new(config: ConversationGcConfig, store: Arc<dyn ConversationStorePort>) -> Self {
        Self { config, store }
    }

    /// 执行一次回收，返回删除的会话数
    pub fn sweep(&self) -> usize {
        let expired = self
            .store
            .get_expired_sessions(self.config.session_expire_secs);

        let removed = expired
            .iter()
            .filter(|session_id| self.store.remove(session_id))
            .count();

        if removed > 0 {
            tracing::info!(
                removed = removed,
                remaining = self.store.session_count(),
                "Expired conversations removed"
            );
        }
        removed
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            session_expire_secs = self.config.session_expire_secs,
            "ConversationGcWorker started"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        // 第一次 tick 立即返回，跳过
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.sweep();
        }
    }
}
