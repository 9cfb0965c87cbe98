//! Run Quiz use case.
//!
//! Drives a [`QuizEngine`] with actions from a [`QuizPrompter`] until the
//! last question is confirmed, then persists the answers through the
//! [`AnswerStore`].
//!
//! ```text
//! render ─▶ prompter.next_action ─▶ engine.apply ─┬─ Selected / Moved ─▶ render
//!                                                 ├─ Blocked ─▶ notify(AnswerRequired)
//!                                                 ├─ Err(e)  ─▶ notify(Rejected(e))
//!                                                 └─ Committed(answers) ─▶ store.save ─▶ done
//! ```

use crate::ports::answer_store::{AnswerStore, StoreError};
use crate::ports::quiz_prompter::{PrompterError, QuizAction, QuizNotice, QuizPrompter};
use madori_domain::{AnswerSet, QuizEngine, Questionnaire, Transition};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the quiz
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error("Prompter error: {0}")]
    Prompter(#[from] PrompterError),

    #[error("Could not save answers: {0}")]
    Store(#[from] StoreError),
}

/// How the quiz ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunQuizOutput {
    /// All questions answered and the answers saved
    Completed(AnswerSet),
    /// The user quit; nothing was saved
    Abandoned { answered: usize },
}

/// Use case for taking the questionnaire
pub struct RunQuizUseCase {
    store: Arc<dyn AnswerStore>,
    prompter: Arc<dyn QuizPrompter>,
}

impl Clone for RunQuizUseCase {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            prompter: self.prompter.clone(),
        }
    }
}

impl RunQuizUseCase {
    pub fn new(store: Arc<dyn AnswerStore>, prompter: Arc<dyn QuizPrompter>) -> Self {
        Self { store, prompter }
    }

    pub async fn execute(&self, questionnaire: Questionnaire) -> Result<RunQuizOutput, RunQuizError> {
        info!("Starting quiz with {} questions", questionnaire.len());
        let mut engine = QuizEngine::new(questionnaire);

        loop {
            let view = engine.render();
            let event = match self.prompter.next_action(&view).await? {
                QuizAction::Event(event) => event,
                QuizAction::Quit => {
                    info!("Quiz abandoned at question {}", view.position);
                    return Ok(RunQuizOutput::Abandoned {
                        answered: engine.answers().len(),
                    });
                }
            };

            match engine.apply(event) {
                Ok(Transition::Committed(answers)) => {
                    self.store.save(&answers)?;
                    info!("Quiz committed with {} answers", answers.len());
                    return Ok(RunQuizOutput::Completed(answers));
                }
                Ok(Transition::Blocked) => {
                    self.prompter.notify(&QuizNotice::AnswerRequired);
                }
                Ok(transition) => {
                    debug!("Quiz transition: {:?}", transition);
                }
                Err(e) => {
                    debug!("Quiz event rejected: {}", e);
                    self.prompter.notify(&QuizNotice::Rejected(e));
                }
            }
        }
    }
}
