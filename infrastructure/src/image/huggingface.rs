//! Hugging Face Inference API adapter.
//!
//! `POST {endpoint}/models/{model}` with a bearer key. The response body is
//! the raw image, returned to callers as a `data:image/png;base64,` URL.

use super::{classify_failure, http_client, transport_error};
use crate::config::FileImageConfig;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use madori_application::ports::image_generator::{ImageError, ImageGenerator, ImageReference};
use serde::Serialize;
use tracing::{debug, info};

const NUM_INFERENCE_STEPS: u32 = 30;
const GUIDANCE_SCALE: f32 = 7.5;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    num_inference_steps: u32,
    guidance_scale: f32,
}

/// [`ImageGenerator`] calling a Hugging Face text-to-image model
pub struct HuggingFaceImageGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl HuggingFaceImageGenerator {
    /// Build from `[image]` config. The key is read from `api_key_env` now;
    /// a missing key only fails when an image is requested.
    pub fn from_config(config: &FileImageConfig) -> Result<Self, ImageError> {
        Ok(Self {
            client: http_client(config.timeout())?,
            endpoint: config.endpoint().to_string(),
            model: config.model.clone(),
            api_key: config.api_key(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    #[cfg(test)]
    fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

fn request_body(prompt: &str) -> InferenceRequest<'_> {
    InferenceRequest {
        inputs: prompt,
        parameters: InferenceParameters {
            num_inference_steps: NUM_INFERENCE_STEPS,
            guidance_scale: GUIDANCE_SCALE,
        },
    }
}

fn to_data_url(image: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(image))
}

#[async_trait]
impl ImageGenerator for HuggingFaceImageGenerator {
    fn provider_name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str) -> Result<ImageReference, ImageError> {
        if prompt.trim().is_empty() {
            return Err(ImageError::InvalidRequest("prompt is required".to_string()));
        }
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ImageError::NotConfigured(format!("set {} to your Hugging Face token", self.api_key_env))
        })?;

        let url = self.request_url();
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        let image = response.bytes().await.map_err(transport_error)?;
        info!("Received {} bytes from {}", image.len(), self.model);
        Ok(ImageReference::new(to_data_url(&image)))
    }
}
