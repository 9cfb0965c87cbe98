//! Application-level configuration.
//!
//! - [`ImageParams`]: image generation loop control (slots, courtesy delay)

pub mod image_params;

pub use image_params::ImageParams;
