//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid questionnaire: {0}")]
    InvalidQuestionnaire(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(u32),

    #[error("Selection for question {got} but question {current} is being shown")]
    StaleSelection { current: u32, got: u32 },

    #[error("'{choice}' is not an option of question {question}")]
    InvalidChoice { question: u32, choice: String },

    #[error("Question {question} expects a {expected} answer")]
    AnswerShapeMismatch {
        question: u32,
        expected: &'static str,
    },

    #[error("Missing answer for question {0}")]
    MissingAnswer(u32),

    #[error("Quiz has already been committed")]
    AlreadyCommitted,
}

impl DomainError {
    /// Check if this error comes from an incomplete or malformed answer set
    pub fn is_incomplete_answers(&self) -> bool {
        matches!(
            self,
            DomainError::MissingAnswer(_) | DomainError::AnswerShapeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_answer_display() {
        let error = DomainError::MissingAnswer(3);
        assert_eq!(error.to_string(), "Missing answer for question 3");
    }

    #[test]
    fn test_is_incomplete_answers() {
        assert!(DomainError::MissingAnswer(1).is_incomplete_answers());
        assert!(
            DomainError::AnswerShapeMismatch {
                question: 5,
                expected: "multiple-choice"
            }
            .is_incomplete_answers()
        );
        assert!(!DomainError::AlreadyCommitted.is_incomplete_answers());
        assert!(!DomainError::UnknownQuestion(9).is_incomplete_answers());
    }
}
