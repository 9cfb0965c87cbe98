//! Image generator port
//!
//! Defines the interface for turning a text prompt into an image reference.
//! Adapters (Hugging Face, Pollinations) live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Guidance shown when the provider is still loading its model
pub const MODEL_LOADING_MESSAGE: &str =
    "AIモデルを準備中です。20秒ほど待ってから再度お試しください。";

/// Errors that can occur during image generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// HTTP 503 from the provider: the model is warming up
    #[error("Model is loading: {message}")]
    ModelLoading { message: String },

    /// Any other non-success status
    #[error("Failed to generate image (HTTP {status}): {details}")]
    Failed { status: u16, details: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ImageError {
    pub fn model_loading() -> Self {
        ImageError::ModelLoading {
            message: MODEL_LOADING_MESSAGE.to_string(),
        }
    }

    /// Worth trying again after a short wait
    pub fn is_retryable(&self) -> bool {
        matches!(self, ImageError::ModelLoading { .. })
    }
}

/// Something usable directly as an image source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    pub url: String,
}

impl ImageReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// `data:` URL carrying the image inline
    pub fn is_inline(&self) -> bool {
        self.url.starts_with("data:")
    }
}

/// Gateway to a text-to-image provider
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Short provider name for logs and output
    fn provider_name(&self) -> &str;

    /// Generate one image for `prompt`. Single shot: no retry.
    async fn generate(&self, prompt: &str) -> Result<ImageReference, ImageError>;
}
