//! Domain layer for madori-shindan
//!
//! This crate contains the questionnaire, the quiz state machine and the
//! rule tables that turn a completed answer set into a recommendation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! - **Questionnaire**: a fixed, ordered list of single- or multiple-choice questions
//! - **QuizEngine**: walks the questionnaire forward and backward, gating
//!   forward moves on a valid answer, and yields the [`AnswerSet`] on commit
//!
//! ## Recommendation
//!
//! Pure lookup-table rules over [`RecommendationInputs`]: summary, layout,
//! budget / floor area, vendor shortlist and the two image prompts.

pub mod config;
pub mod core;
pub mod quiz;
pub mod recommendation;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use quiz::{
    answer::{Answer, AnswerSet},
    catalog::{QuestionSlot, default_questionnaire},
    engine::{QuizEngine, QuizEvent, Transition},
    question::{Question, QuestionId, QuestionKind, Questionnaire},
    view::{NextControl, OptionView, QuestionView},
};
pub use recommendation::{
    Recommendation,
    budget::{BudgetEstimate, derive_budget_estimate},
    inputs::RecommendationInputs,
    layout::{LayoutSuggestion, derive_layout},
    prompt::{ImagePrompts, ImageSlot, exterior_prompt, floor_plan_prompt},
    summary::{Summary, derive_summary},
    vendor::{VendorProfile, select_vendors, vendor_catalog},
};
