//! Quiz prompter port
//!
//! The quiz use case owns the [`QuizEngine`](madori_domain::QuizEngine); the
//! prompter only shows a [`QuestionView`] and reports what the user did.
//!
//! # Architecture
//!
//! - **Port**: [`QuizPrompter`] - defined here in application layer
//! - **Adapter**: `TerminalQuizPrompter` - implemented in presentation layer

use async_trait::async_trait;
use madori_domain::{DomainError, QuestionView, QuizEvent};
use thiserror::Error;

/// What the user did on the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    Event(QuizEvent),
    /// Leave the quiz without saving
    Quit,
}

/// Feedback for the user about the previous action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizNotice {
    /// Forward move refused: the question needs an answer first
    AnswerRequired,
    /// The engine rejected the action
    Rejected(DomainError),
}

/// Error type for prompter operations.
///
/// These are failures of the interaction itself, not user decisions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrompterError {
    #[error("Operation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for collecting quiz actions from the user
#[async_trait]
pub trait QuizPrompter: Send + Sync {
    /// Show `view` and wait for the next action
    async fn next_action(&self, view: &QuestionView) -> Result<QuizAction, PrompterError>;

    /// Show feedback about the previous action
    fn notify(&self, _notice: &QuizNotice) {}
}
