//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_images;
pub mod run_quiz;
pub mod show_result;
