//! Progress display for image generation

pub mod reporter;
