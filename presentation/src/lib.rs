//! Presentation layer for madori
//!
//! This crate contains CLI definitions, the interactive quiz prompter,
//! output formatters, and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, ProviderArg, SlotArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::TerminalQuizPrompter;
