//! Application layer for madori
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ImageParams;
pub use ports::{
    answer_store::{ANSWER_STORE_KEY, AnswerStore, InMemoryAnswerStore, StoreError},
    image_generator::{ImageError, ImageGenerator, ImageReference, MODEL_LOADING_MESSAGE},
    image_progress::{ImageProgressNotifier, NoImageProgress},
    quiz_prompter::{PrompterError, QuizAction, QuizNotice, QuizPrompter},
};
pub use use_cases::generate_images::{GenerateImagesOutput, GenerateImagesUseCase, SlotOutcome};
pub use use_cases::run_quiz::{RunQuizError, RunQuizOutput, RunQuizUseCase};
pub use use_cases::show_result::{
    NO_SESSION_MESSAGE, ShowResultError, ShowResultOutput, ShowResultUseCase,
};
