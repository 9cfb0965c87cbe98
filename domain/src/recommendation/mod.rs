//! Recommendation rules
//!
//! Each rule is a pure function over a slice of [`RecommendationInputs`].
//! [`Recommendation::derive`] runs all of them for a stored answer set.

pub mod budget;
pub mod inputs;
pub mod layout;
pub mod prompt;
pub mod summary;
pub mod vendor;

use crate::core::error::DomainError;
use crate::quiz::answer::AnswerSet;
use budget::{BudgetEstimate, derive_budget_estimate};
use inputs::RecommendationInputs;
use layout::{LayoutSuggestion, derive_layout};
use prompt::ImagePrompts;
use serde::Serialize;
use summary::{Summary, derive_summary};
use vendor::{VendorProfile, select_vendors};

/// Everything shown on the result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub summary: Summary,
    pub layout: LayoutSuggestion,
    pub budget: BudgetEstimate,
    pub vendors: Vec<VendorProfile>,
    pub image_prompts: ImagePrompts,
}

impl Recommendation {
    pub fn derive(answers: &AnswerSet) -> Result<Self, DomainError> {
        let inputs = RecommendationInputs::from_answers(answers)?;
        Ok(Self::from_inputs(&inputs))
    }

    pub fn from_inputs(inputs: &RecommendationInputs) -> Self {
        Self {
            summary: derive_summary(
                &inputs.family_type,
                &inputs.rooms,
                &inputs.budget,
                &inputs.style,
            ),
            layout: derive_layout(
                &inputs.rooms,
                &inputs.priorities,
                &inputs.facilities,
                &inputs.lifestyle,
            ),
            budget: derive_budget_estimate(&inputs.budget, &inputs.rooms, &inputs.family_type),
            vendors: select_vendors(&inputs.style, &inputs.budget, &inputs.priorities)
                .into_iter()
                .cloned()
                .collect(),
            image_prompts: ImagePrompts::from_inputs(inputs),
        }
    }
}
