//! Answers collected by the quiz
//!
//! The [`AnswerSet`] is the only durable artifact of a quiz run. It serializes
//! as a JSON object keyed by the decimal question id, with a string for
//! single-choice answers and an array for multiple-choice answers:
//!
//! ```json
//! {"1": "夫婦2人", "5": ["耐震性", "断熱性"]}
//! ```

use super::question::{QuestionId, QuestionKind, Questionnaire};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The answer to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// The selected option of a single-choice question
    Single(String),
    /// The full set of checked options of a multiple-choice question
    Multiple(Vec<String>),
}

impl Answer {
    pub fn single(choice: impl Into<String>) -> Self {
        Answer::Single(choice.into())
    }

    pub fn multiple(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Answer::Multiple(choices.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::Single(_) => QuestionKind::Single,
            Answer::Multiple(_) => QuestionKind::Multiple,
        }
    }

    /// A single answer is always usable; a multiple answer needs at least one option
    pub fn is_valid(&self) -> bool {
        match self {
            Answer::Single(_) => true,
            Answer::Multiple(choices) => !choices.is_empty(),
        }
    }

    /// Check if `option` is part of this answer
    pub fn contains(&self, option: &str) -> bool {
        match self {
            Answer::Single(choice) => choice == option,
            Answer::Multiple(choices) => choices.iter().any(|c| c == option),
        }
    }
}

/// Answers keyed by question id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for a question, replacing any previous one
    pub fn insert(&mut self, id: QuestionId, answer: Answer) {
        self.answers.insert(id, answer);
    }

    /// Builder form of [`insert`](Self::insert) taking a raw id
    pub fn with(mut self, id: u32, answer: Answer) -> Self {
        self.insert(QuestionId::new(id), answer);
        self
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers.iter()
    }

    /// The single-choice answer of `id`
    pub fn single(&self, id: QuestionId) -> Result<&str, DomainError> {
        match self.get(id) {
            Some(Answer::Single(choice)) => Ok(choice),
            Some(Answer::Multiple(_)) => Err(DomainError::AnswerShapeMismatch {
                question: id.value(),
                expected: QuestionKind::Single.as_str(),
            }),
            None => Err(DomainError::MissingAnswer(id.value())),
        }
    }

    /// The multiple-choice answer of `id`
    pub fn multiple(&self, id: QuestionId) -> Result<&[String], DomainError> {
        match self.get(id) {
            Some(Answer::Multiple(choices)) => Ok(choices),
            Some(Answer::Single(_)) => Err(DomainError::AnswerShapeMismatch {
                question: id.value(),
                expected: QuestionKind::Multiple.as_str(),
            }),
            None => Err(DomainError::MissingAnswer(id.value())),
        }
    }

    /// Check that every question of `questionnaire` has exactly one valid
    /// answer of the right shape, and nothing else is present.
    pub fn validate_complete(&self, questionnaire: &Questionnaire) -> Result<(), DomainError> {
        for question in questionnaire.iter() {
            let answer = self
                .get(question.id)
                .ok_or(DomainError::MissingAnswer(question.id.value()))?;
            if answer.kind() != question.kind {
                return Err(DomainError::AnswerShapeMismatch {
                    question: question.id.value(),
                    expected: question.kind.as_str(),
                });
            }
            if !answer.is_valid() {
                return Err(DomainError::MissingAnswer(question.id.value()));
            }
        }
        if let Some(extra) = self.answers.keys().find(|id| questionnaire.get(**id).is_none()) {
            return Err(DomainError::UnknownQuestion(extra.value()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::Question;

    fn questionnaire() -> Questionnaire {
        Questionnaire::new(vec![
            Question::new(1, "Family", QuestionKind::Single, ["a", "b"]),
            Question::new(2, "Features", QuestionKind::Multiple, ["x", "y", "z"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_serializes_with_string_keys() {
        let answers = AnswerSet::new()
            .with(1, Answer::single("夫婦2人"))
            .with(5, Answer::multiple(["耐震性", "断熱性"]));
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":"夫婦2人","5":["耐震性","断熱性"]}"#);
    }

    #[test]
    fn test_deserializes_stored_format() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"2":"3LDK","6":["書斎","ロフト"]}"#).unwrap();
        assert_eq!(answers.single(QuestionId::new(2)).unwrap(), "3LDK");
        assert_eq!(
            answers.multiple(QuestionId::new(6)).unwrap(),
            &["書斎".to_string(), "ロフト".to_string()]
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::new(1), Answer::single("a"));
        answers.insert(QuestionId::new(1), Answer::single("b"));
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.single(QuestionId::new(1)).unwrap(), "b");
    }

    #[test]
    fn test_shape_mismatch() {
        let answers = AnswerSet::new().with(1, Answer::multiple(["a"]));
        assert!(matches!(
            answers.single(QuestionId::new(1)),
            Err(DomainError::AnswerShapeMismatch { question: 1, .. })
        ));
        assert_eq!(
            answers.multiple(QuestionId::new(2)),
            Err(DomainError::MissingAnswer(2))
        );
    }

    #[test]
    fn test_validate_complete() {
        let q = questionnaire();
        let complete = AnswerSet::new()
            .with(1, Answer::single("a"))
            .with(2, Answer::multiple(["x"]));
        assert!(complete.validate_complete(&q).is_ok());

        let empty_multi = AnswerSet::new()
            .with(1, Answer::single("a"))
            .with(2, Answer::Multiple(Vec::new()));
        assert_eq!(
            empty_multi.validate_complete(&q),
            Err(DomainError::MissingAnswer(2))
        );

        let extra = complete.clone().with(9, Answer::single("?"));
        assert_eq!(
            extra.validate_complete(&q),
            Err(DomainError::UnknownQuestion(9))
        );
    }

    #[test]
    fn test_answer_validity() {
        assert!(Answer::single("a").is_valid());
        assert!(!Answer::Multiple(Vec::new()).is_valid());
        assert!(Answer::multiple(["x", "y"]).contains("y"));
    }
}
