//! Answer store and image file adapters

mod image_file;
mod json_file;

pub use image_file::save_inline_image;
pub use json_file::JsonFileAnswerStore;
