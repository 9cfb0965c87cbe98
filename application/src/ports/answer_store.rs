//! Answer store port
//!
//! A single string-keyed slot holding the JSON-serialized [`AnswerSet`] of the
//! last completed quiz. The quiz writes it; the result view reads it.

use madori_domain::AnswerSet;
use std::sync::Mutex;
use thiserror::Error;

/// Fixed key of the answer slot
pub const ANSWER_STORE_KEY: &str = "diagnosisAnswers";

/// Errors that can occur while reading or writing the answer slot
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Durable storage for the answer set
///
/// `load` returns `Ok(None)` when there is no usable session: the slot is
/// empty, or its content cannot be parsed.
pub trait AnswerStore: Send + Sync {
    /// Overwrite the slot with `answers`
    fn save(&self, answers: &AnswerSet) -> Result<(), StoreError>;

    /// Read the slot
    fn load(&self) -> Result<Option<AnswerSet>, StoreError>;
}

/// Process-local store, for tests and `--no-save` style runs
#[derive(Default)]
pub struct InMemoryAnswerStore {
    slot: Mutex<Option<AnswerSet>>,
}

impl InMemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: AnswerSet) -> Self {
        Self {
            slot: Mutex::new(Some(answers)),
        }
    }
}

impl AnswerStore for InMemoryAnswerStore {
    fn save(&self, answers: &AnswerSet) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        *slot = Some(answers.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<AnswerSet>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(slot.clone())
    }
}
