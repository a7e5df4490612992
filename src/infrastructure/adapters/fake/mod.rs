//! Fake Adapter - 离线 AI 客户端

mod fake_ai_client;

pub use fake_ai_client::{silent_wav, FakeAiClient, FakeAiClientConfig};
