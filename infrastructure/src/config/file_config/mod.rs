//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod image;
mod output;
mod storage;

pub use image::{FileImageConfig, ImageProvider};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("image.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("image.width and image.height must be greater than 0")]
    InvalidImageSize,

    #[error("image.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Image generation settings
    pub image: FileImageConfig,
    /// Answer storage settings
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.image.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.image.width == 0 || self.image.height == 0 {
            return Err(ConfigValidationError::InvalidImageSize);
        }

        if self.image.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        Ok(())
    }
}
