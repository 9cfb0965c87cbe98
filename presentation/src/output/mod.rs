//! Result and image output formatting

pub mod console;
pub mod formatter;
