//! Image HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateImage;
use crate::domain::image::ImageError;
use crate::infrastructure::http::dto::{
    optional_string_field, string_field, ApiResponse, GenerateImageRequest, ImageResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// 文生图
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateImageRequest>,
) -> Result<Json<ApiResponse<ImageResponse>>, ApiError> {
    let size = optional_string_field(req.size).map_err(|wrong| {
        ApiError::BadRequest(ImageError::UnsupportedSize(wrong.0.to_string()).to_string())
    })?;

    let command = GenerateImage {
        prompt: string_field(req.prompt),
        size,
    };

    let result = state.generate_image_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ImageResponse {
        image: result.image,
        prompt: result.prompt,
        size: result.size,
    })))
}
