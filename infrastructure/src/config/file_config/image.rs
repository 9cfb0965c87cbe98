//! Image generation configuration from TOML (`[image]` section)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Text-to-image backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageProvider {
    /// Hugging Face Inference API (API key required)
    #[default]
    HuggingFace,
    /// Pollinations (keyless URL scheme)
    Pollinations,
}

impl ImageProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageProvider::HuggingFace => "huggingface",
            ImageProvider::Pollinations => "pollinations",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ImageProvider::HuggingFace => "https://router.huggingface.co",
            ImageProvider::Pollinations => "https://image.pollinations.ai",
        }
    }
}

impl fmt::Display for ImageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(ImageProvider::HuggingFace),
            "pollinations" => Ok(ImageProvider::Pollinations),
            other => Err(format!(
                "unknown image provider '{}' (expected huggingface or pollinations)",
                other
            )),
        }
    }
}

/// Raw image generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Which backend to call
    pub provider: ImageProvider,
    /// Model id (Hugging Face only)
    pub model: String,
    /// Base URL override. `None` uses the provider's public endpoint.
    pub endpoint: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Requested image width (Pollinations only)
    pub width: u32,
    /// Requested image height (Pollinations only)
    pub height: u32,
    /// Pause between the exterior and floor-plan requests
    pub request_delay_ms: u64,
    /// HTTP timeout per request
    pub timeout_seconds: u64,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        Self {
            provider: ImageProvider::default(),
            model: "stabilityai/stable-diffusion-xl-base-1.0".to_string(),
            endpoint: None,
            api_key_env: "HUGGINGFACE_API_KEY".to_string(),
            width: 1024,
            height: 1024,
            request_delay_ms: 3000,
            timeout_seconds: 120,
        }
    }
}

impl FileImageConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.provider.default_endpoint())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}
