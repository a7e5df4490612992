//! Image Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateImage, GenerateImageResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{ImageGenerationPort, ImageGenerationRequest};
use crate::domain::image::{ImageError, ImagePrompt, ImageSize};

/// GenerateImage Handler
pub struct GenerateImageHandler {
    images: Arc<dyn ImageGenerationPort>,
}

impl GenerateImageHandler {
    pub fn new(images: Arc<dyn ImageGenerationPort>) -> Self {
        Self { images }
    }

    pub async fn handle(
        &self,
        command: GenerateImage,
    ) -> Result<GenerateImageResponse, ApplicationError> {
        let raw = command.prompt.ok_or(ImageError::MissingPrompt)?;
        let prompt = ImagePrompt::new(&raw)?;
        let size = match command.size {
            Some(size) => size.parse::<ImageSize>()?,
            None => ImageSize::default(),
        };

        tracing::info!(size = %size, prompt_len = prompt.as_str().len(), "Generating image");

        let generated = self
            .images
            .generate(ImageGenerationRequest {
                prompt: prompt.clone(),
                size,
            })
            .await?;

        let base64 = generated
            .base64
            .filter(|b| !b.is_empty())
            .ok_or(ApplicationError::EmptyResult("Failed to generate image"))?;

        Ok(GenerateImageResponse {
            image: format!("data:image/png;base64,{}", base64),
            prompt: prompt.into_inner(),
            size: size.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::ports::{AiServiceError, GeneratedImage};

    struct StubImages {
        base64: Option<&'static str>,
        seen: Mutex<Vec<ImageGenerationRequest>>,
    }

    #[async_trait]
    impl ImageGenerationPort for StubImages {
        async fn generate(
            &self,
            request: ImageGenerationRequest,
        ) -> Result<GeneratedImage, AiServiceError> {
            self.seen.lock().unwrap().push(request);
            Ok(GeneratedImage {
                base64: self.base64.map(str::to_string),
            })
        }
    }

    fn stub(base64: Option<&'static str>) -> Arc<StubImages> {
        Arc::new(StubImages {
            base64,
            seen: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_generate_with_default_size() {
        let images = stub(Some("iVBORw0KGgo="));
        let handler = GenerateImageHandler::new(images.clone());

        let result = handler
            .handle(GenerateImage {
                prompt: Some("  a lighthouse at dusk ".to_string()),
                size: None,
            })
            .await
            .unwrap();

        assert_eq!(result.image, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(result.prompt, "a lighthouse at dusk");
        assert_eq!(result.size, "1024x1024");

        let seen = images.seen.lock().unwrap();
        assert_eq!(seen[0].size, ImageSize::Square1024);
        assert_eq!(seen[0].prompt.as_str(), "a lighthouse at dusk");
    }

    #[tokio::test]
    async fn test_invalid_input_never_calls_service() {
        let images = stub(Some("x"));
        let handler = GenerateImageHandler::new(images.clone());

        for command in [
            GenerateImage { prompt: None, size: None },
            GenerateImage { prompt: Some(" ".to_string()), size: None },
            GenerateImage {
                prompt: Some("cat".to_string()),
                size: Some("512x512".to_string()),
            },
        ] {
            let err = handler.handle(command).await.unwrap_err();
            assert!(matches!(err, ApplicationError::ValidationError(_)));
        }
        assert!(images.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_image_is_server_error() {
        let handler = GenerateImageHandler::new(stub(None));
        let err = handler
            .handle(GenerateImage {
                prompt: Some("cat".to_string()),
                size: Some("1440x720".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::EmptyResult("Failed to generate image")));
    }
}
