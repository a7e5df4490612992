//! Request Extractors
//!
//! - ApiJson: JSON 请求体，解析失败时返回统一错误格式
//! - SessionId: 从 X-Session-Id 请求头读取会话标识

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use super::error::ApiError;

/// 会话标识请求头
pub const SESSION_HEADER: &str = "x-session-id";

/// 缺省会话
pub const DEFAULT_SESSION_ID: &str = "default";

/// 会话标识最大长度
pub const MAX_SESSION_ID_LEN: usize = 128;

/// JSON 请求体
///
/// 与 axum::Json 相同，只是 rejection 换成 ApiError
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// 会话标识
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SESSION_HEADER)
            .map(|v| {
                v.to_str()
                    .map_err(|_| ApiError::BadRequest("Invalid X-Session-Id header".to_string()))
            })
            .transpose()?
            .map(str::trim)
            .filter(|v| !v.is_empty());

        match value {
            None => Ok(SessionId(DEFAULT_SESSION_ID.to_string())),
            Some(v) if v.chars().count() > MAX_SESSION_ID_LEN => Err(ApiError::BadRequest(
                format!("X-Session-Id must be at most {} characters", MAX_SESSION_ID_LEN),
            )),
            Some(v) => Ok(SessionId(v.to_string())),
        }
    }
}
