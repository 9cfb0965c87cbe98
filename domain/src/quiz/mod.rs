//! Quiz domain: questions, answers and the state machine that walks them.
//!
//! - [`question::Questionnaire`]: the validated, ordered question list
//! - [`answer::AnswerSet`]: answers keyed by question id, the persisted artifact
//! - [`engine::QuizEngine`]: forward/backward walk with an answer gate
//! - [`view::QuestionView`]: declarative display model of the current question

pub mod answer;
pub mod catalog;
pub mod engine;
pub mod question;
pub mod view;
