//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod answer_store;
pub mod image_generator;
pub mod image_progress;
pub mod quiz_prompter;
