//! Read-only projection of an answer set for the recommendation rules

use crate::core::error::DomainError;
use crate::quiz::answer::AnswerSet;
use crate::quiz::catalog::QuestionSlot;
use serde::{Deserialize, Serialize};

/// The eight answers the recommendation rules read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationInputs {
    pub family_type: String,
    pub rooms: String,
    pub budget: String,
    pub style: String,
    pub priorities: Vec<String>,
    pub facilities: Vec<String>,
    pub garden: String,
    pub lifestyle: String,
}

impl RecommendationInputs {
    /// Project a stored answer set
    ///
    /// Every slot must be present with the right shape; a missing or
    /// malformed answer is rejected rather than rendered blank.
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, DomainError> {
        let single = |slot: QuestionSlot| answers.single(slot.id()).map(str::to_string);
        let multiple = |slot: QuestionSlot| answers.multiple(slot.id()).map(<[String]>::to_vec);

        Ok(Self {
            family_type: single(QuestionSlot::FamilyType)?,
            rooms: single(QuestionSlot::Rooms)?,
            budget: single(QuestionSlot::Budget)?,
            style: single(QuestionSlot::Style)?,
            priorities: multiple(QuestionSlot::Priorities)?,
            facilities: multiple(QuestionSlot::Facilities)?,
            garden: single(QuestionSlot::Garden)?,
            lifestyle: single(QuestionSlot::Lifestyle)?,
        })
    }
}
