//! Infrastructure layer for madori
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod image;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileImageConfig, FileOutputConfig,
    FileOutputFormat, FileStorageConfig, ImageProvider,
};
pub use image::{HuggingFaceImageGenerator, PollinationsImageGenerator, build_image_generator};
pub use storage::{JsonFileAnswerStore, save_inline_image};
