//! Question and questionnaire value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stable identifier of a question, also its key in the persisted answer set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Whether a question takes one option or a set of options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one option (rendered as buttons)
    Single,
    /// One or more options (rendered as checkboxes)
    Multiple,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Single => "single-choice",
            QuestionKind::Multiple => "multiple-choice",
        }
    }
}

/// A single question of the questionnaire (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        kind: QuestionKind,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: QuestionId(id),
            prompt: prompt.into(),
            kind,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if `choice` is one of this question's options
    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.trim().is_empty() {
            return Err(DomainError::InvalidQuestionnaire(format!(
                "question {} has an empty prompt",
                self.id
            )));
        }
        if self.options.is_empty() {
            return Err(DomainError::InvalidQuestionnaire(format!(
                "question {} has no options",
                self.id
            )));
        }
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(DomainError::InvalidQuestionnaire(format!(
                    "question {} lists option '{}' twice",
                    self.id, option
                )));
            }
        }
        Ok(())
    }
}

/// The fixed, ordered list of questions
///
/// Immutable once built. Construction checks that ids are unique and that
/// every question has a non-empty list of unique options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::InvalidQuestionnaire(
                "at least one question is required".to_string(),
            ));
        }
        let mut ids = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !ids.insert(question.id) {
                return Err(DomainError::InvalidQuestionnaire(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
        }
        Ok(Self { questions })
    }

    /// Build from data already known to be valid (the built-in catalogue)
    pub(crate) fn from_trusted(questions: Vec<Question>) -> Self {
        debug_assert!(Self::new(questions.clone()).is_ok());
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Question at a 0-based position
    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, options: &[&str]) -> Question {
        Question::new(id, "Pick one", QuestionKind::Single, options.iter().copied())
    }

    #[test]
    fn test_questionnaire_accepts_valid_questions() {
        let q = Questionnaire::new(vec![question(1, &["a", "b"]), question(2, &["c"])]).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(q.position(QuestionId::new(2)), Some(1));
        assert_eq!(q.at(0).map(|q| q.id), Some(QuestionId::new(1)));
    }

    #[test]
    fn test_questionnaire_rejects_duplicate_ids() {
        let err = Questionnaire::new(vec![question(1, &["a"]), question(1, &["b"])]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestionnaire(_)));
    }

    #[test]
    fn test_questionnaire_rejects_empty_options() {
        assert!(Questionnaire::new(vec![question(1, &[])]).is_err());
    }

    #[test]
    fn test_questionnaire_rejects_duplicate_options() {
        assert!(Questionnaire::new(vec![question(1, &["a", "a"])]).is_err());
    }

    #[test]
    fn test_questionnaire_rejects_empty_list() {
        assert!(Questionnaire::new(Vec::new()).is_err());
    }

    #[test]
    fn test_has_option() {
        let q = question(1, &["a", "b", "c"]);
        assert!(q.has_option("c"));
        assert!(!q.has_option("d"));
    }

    #[test]
    fn test_question_id_serializes_as_number() {
        let json = serde_json::to_string(&QuestionId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
