//! Z.ai Adapter - 托管 AI 服务客户端

mod zai_client;

pub use zai_client::{ZaiClient, ZaiClientConfig};
