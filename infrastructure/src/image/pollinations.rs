//! Pollinations adapter.
//!
//! Images are addressed by URL: `GET {endpoint}/prompt/{prompt}?width=..`.
//! A success status means that URL is itself the image reference.

use super::{classify_failure, http_client, transport_error};
use crate::config::FileImageConfig;
use async_trait::async_trait;
use madori_application::ports::image_generator::{ImageError, ImageGenerator, ImageReference};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

/// [`ImageGenerator`] for the keyless Pollinations service
pub struct PollinationsImageGenerator {
    client: reqwest::Client,
    endpoint: String,
    width: u32,
    height: u32,
}

impl PollinationsImageGenerator {
    pub fn from_config(config: &FileImageConfig) -> Result<Self, ImageError> {
        Ok(Self {
            client: http_client(config.timeout())?,
            endpoint: config.endpoint().to_string(),
            width: config.width,
            height: config.height,
        })
    }

    fn image_url(&self, prompt: &str) -> String {
        format!(
            "{}/prompt/{}?width={}&height={}&nologo=true",
            self.endpoint.trim_end_matches('/'),
            utf8_percent_encode(prompt, NON_ALPHANUMERIC),
            self.width,
            self.height
        )
    }
}

#[async_trait]
impl ImageGenerator for PollinationsImageGenerator {
    fn provider_name(&self) -> &str {
        "pollinations"
    }

    async fn generate(&self, prompt: &str) -> Result<ImageReference, ImageError> {
        if prompt.trim().is_empty() {
            return Err(ImageError::InvalidRequest("prompt is required".to_string()));
        }

        let url = self.image_url(prompt);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        Ok(ImageReference::new(url))
    }
}
