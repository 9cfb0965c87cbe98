//! Show Result use case.
//!
//! Reads the saved answer set and derives the recommendation. A missing or
//! unreadable slot means there is no session to show.

use crate::ports::answer_store::{AnswerStore, StoreError};
use madori_domain::{AnswerSet, DomainError, Recommendation};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Shown when there is nothing to derive from
pub const NO_SESSION_MESSAGE: &str = "診断結果がありません。まず診断を受けてください。";

/// Errors that can occur while building the result
#[derive(Error, Debug)]
pub enum ShowResultError {
    #[error("{}", NO_SESSION_MESSAGE)]
    NoSession,

    #[error("Saved answers are incomplete: {0}")]
    InvalidAnswers(#[from] DomainError),

    #[error("Could not read saved answers: {0}")]
    Store(#[from] StoreError),
}

impl ShowResultError {
    /// The user has to take the quiz (again) to get a result
    pub fn requires_restart(&self) -> bool {
        matches!(
            self,
            ShowResultError::NoSession | ShowResultError::InvalidAnswers(_)
        )
    }
}

#[derive(Debug, Clone)]
pub struct ShowResultOutput {
    pub answers: AnswerSet,
    pub recommendation: Recommendation,
}

/// Use case for deriving the result page from the saved answers
pub struct ShowResultUseCase {
    store: Arc<dyn AnswerStore>,
}

impl ShowResultUseCase {
    pub fn new(store: Arc<dyn AnswerStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<ShowResultOutput, ShowResultError> {
        let answers = self.store.load()?.ok_or(ShowResultError::NoSession)?;
        let recommendation = Recommendation::derive(&answers).inspect_err(|e| {
            warn!("Saved answers cannot be used: {}", e);
        })?;
        info!(
            "Derived recommendation with {} vendors",
            recommendation.vendors.len()
        );
        Ok(ShowResultOutput {
            answers,
            recommendation,
        })
    }
}
