//! Interactive quiz in the terminal

pub mod prompter;

pub use prompter::TerminalQuizPrompter;
