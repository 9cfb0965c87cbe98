//! Text-to-image adapters
//!
//! Both adapters implement [`ImageGenerator`] over `reqwest` and share the
//! status classification below: 503 means the model is still loading, any
//! other non-success status is a terminal failure for that request.

mod huggingface;
mod pollinations;

pub use huggingface::HuggingFaceImageGenerator;
pub use pollinations::PollinationsImageGenerator;

use crate::config::{FileImageConfig, ImageProvider};
use madori_application::ports::image_generator::{ImageError, ImageGenerator};
use std::sync::Arc;
use std::time::Duration;

/// Longest provider error text kept in [`ImageError::Failed`]
const MAX_ERROR_DETAILS: usize = 500;

/// Build the configured adapter
pub fn build_image_generator(
    config: &FileImageConfig,
) -> Result<Arc<dyn ImageGenerator>, ImageError> {
    Ok(match config.provider {
        ImageProvider::HuggingFace => Arc::new(HuggingFaceImageGenerator::from_config(config)?),
        ImageProvider::Pollinations => Arc::new(PollinationsImageGenerator::from_config(config)?),
    })
}

fn http_client(timeout: Duration) -> Result<reqwest::Client, ImageError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("madori/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ImageError::Internal(format!("failed to build HTTP client: {}", e)))
}

/// Map a non-success status and its body to an [`ImageError`]
fn classify_failure(status: u16, body: &str) -> ImageError {
    if status == 503 {
        return ImageError::model_loading();
    }
    let details: String = body.trim().chars().take(MAX_ERROR_DETAILS).collect();
    ImageError::Failed { status, details }
}

fn transport_error(e: reqwest::Error) -> ImageError {
    if e.is_timeout() {
        ImageError::Transport(format!("request timed out: {}", e))
    } else {
        ImageError::Transport(e.to_string())
    }
}
