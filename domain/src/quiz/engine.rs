//! Quiz state machine
//!
//! The engine walks a [`Questionnaire`] one question at a time:
//!
//! ```text
//!   0 ──advance──▶ 1 ──advance──▶ … ──advance──▶ N-1 ──advance──▶ committed
//!   0 ◀──retreat── 1 ◀──retreat── … ◀──retreat── N-1
//! ```
//!
//! - `advance` is gated on the current question having a valid answer
//!   (present, and non-empty for multiple choice). A gated `advance` is not an
//!   error; it reports [`Transition::Blocked`] and leaves the state untouched.
//! - `retreat` is always allowed and is a no-op on the first question.
//! - `advance` on the last question commits: the engine hands out the complete
//!   [`AnswerSet`] and becomes terminal.

use super::answer::{Answer, AnswerSet};
use super::question::{Question, QuestionId, QuestionKind, Questionnaire};
use super::view::{FINISH_LABEL, NEXT_LABEL, NextControl, OptionView, QuestionView};
use crate::core::error::DomainError;

/// A user action on the quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// Choose an option. For a multiple-choice question `choice` carries the
    /// complete set of checked options, which replaces the previous answer.
    Select {
        question_id: QuestionId,
        choice: Answer,
    },
    /// Forward control
    Next,
    /// Back control
    Back,
}

/// Outcome of applying an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The answer of the current question changed
    Selected,
    /// The current index changed
    Moved { index: usize },
    /// Forward move refused, the current question has no valid answer
    Blocked,
    /// Nothing to do (back on the first question)
    Unchanged,
    /// Last question confirmed; the complete answers are ready to persist
    Committed(AnswerSet),
}

/// Quiz state: the questionnaire, the current position and the answers so far
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questionnaire: Questionnaire,
    index: usize,
    answers: AnswerSet,
    committed: bool,
}

impl QuizEngine {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            index: 0,
            answers: AnswerSet::new(),
            committed: false,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// 0-based index of the question being shown
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> &Question {
        // index is kept within [0, len-1] and a questionnaire is never empty
        &self.questionnaire.questions()[self.index]
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.questionnaire.len()
    }

    /// Whether the forward control is enabled for the current question
    pub fn can_advance(&self) -> bool {
        !self.committed
            && self
                .answers
                .get(self.current_question().id)
                .is_some_and(Answer::is_valid)
    }

    /// Display model of the current question
    pub fn render(&self) -> QuestionView {
        let question = self.current_question();
        let answer = self.answers.get(question.id);
        let options = question
            .options
            .iter()
            .map(|label| OptionView {
                label: label.clone(),
                selected: answer.is_some_and(|a| a.contains(label)),
            })
            .collect();

        QuestionView {
            question_id: question.id,
            prompt: question.prompt.clone(),
            kind: question.kind,
            options,
            position: self.index + 1,
            total: self.questionnaire.len(),
            back_visible: self.index > 0,
            next: NextControl {
                label: if self.is_last() { FINISH_LABEL } else { NEXT_LABEL },
                enabled: self.can_advance(),
            },
        }
    }

    /// Apply a single event
    pub fn apply(&mut self, event: QuizEvent) -> Result<Transition, DomainError> {
        match event {
            QuizEvent::Select {
                question_id,
                choice,
            } => self.select(question_id, choice).map(|_| Transition::Selected),
            QuizEvent::Next => self.advance(),
            QuizEvent::Back => Ok(self.retreat()),
        }
    }

    /// Record the answer for the current question
    ///
    /// Single choice overwrites; multiple choice replaces the whole set with
    /// `choice`, normalised to option order. An empty set is stored as is and
    /// keeps the forward control disabled.
    pub fn select(&mut self, question_id: QuestionId, choice: Answer) -> Result<(), DomainError> {
        if self.committed {
            return Err(DomainError::AlreadyCommitted);
        }
        let question = self
            .questionnaire
            .get(question_id)
            .ok_or(DomainError::UnknownQuestion(question_id.value()))?;
        let current = self.current_question().id;
        if question.id != current {
            return Err(DomainError::StaleSelection {
                current: current.value(),
                got: question_id.value(),
            });
        }

        let answer = match (question.kind, choice) {
            (QuestionKind::Single, Answer::Single(choice)) => {
                ensure_option(question, &choice)?;
                Answer::Single(choice)
            }
            (QuestionKind::Multiple, Answer::Multiple(checked)) => {
                for choice in &checked {
                    ensure_option(question, choice)?;
                }
                // option order, duplicates dropped
                let normalised = question
                    .options
                    .iter()
                    .filter(|o| checked.contains(o))
                    .cloned()
                    .collect();
                Answer::Multiple(normalised)
            }
            (kind, _) => {
                return Err(DomainError::AnswerShapeMismatch {
                    question: question_id.value(),
                    expected: kind.as_str(),
                });
            }
        };

        self.answers.insert(question_id, answer);
        Ok(())
    }

    /// Move forward, or commit on the last question
    pub fn advance(&mut self) -> Result<Transition, DomainError> {
        if self.committed {
            return Err(DomainError::AlreadyCommitted);
        }
        if !self.can_advance() {
            return Ok(Transition::Blocked);
        }
        if self.is_last() {
            self.answers.validate_complete(&self.questionnaire)?;
            self.committed = true;
            return Ok(Transition::Committed(self.answers.clone()));
        }
        self.index += 1;
        Ok(Transition::Moved { index: self.index })
    }

    /// Move back one question; allowed without an answer
    pub fn retreat(&mut self) -> Transition {
        if self.committed || self.index == 0 {
            return Transition::Unchanged;
        }
        self.index -= 1;
        Transition::Moved { index: self.index }
    }
}

fn ensure_option(question: &Question, choice: &str) -> Result<(), DomainError> {
    if question.has_option(choice) {
        Ok(())
    } else {
        Err(DomainError::InvalidChoice {
            question: question.id.value(),
            choice: choice.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::default_questionnaire;

    fn small() -> Questionnaire {
        Questionnaire::new(vec![
            Question::new(1, "Family", QuestionKind::Single, ["a", "b"]),
            Question::new(2, "Features", QuestionKind::Multiple, ["x", "y", "z"]),
            Question::new(3, "Garden", QuestionKind::Single, ["yes", "no"]),
        ])
        .unwrap()
    }

    fn id(n: u32) -> QuestionId {
        QuestionId::new(n)
    }

    #[test]
    fn test_initial_render() {
        let engine = QuizEngine::new(small());
        let view = engine.render();
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 3);
        assert!(!view.back_visible);
        assert!(!view.next.enabled);
        assert_eq!(view.next.label, NEXT_LABEL);
        assert!(view.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_advance_blocked_without_answer() {
        let mut engine = QuizEngine::new(small());
        assert_eq!(engine.advance().unwrap(), Transition::Blocked);
        assert_eq!(engine.current_index(), 0);
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn test_advance_blocked_with_empty_multiple() {
        let mut engine = QuizEngine::new(small());
        engine.select(id(1), Answer::single("a")).unwrap();
        engine.advance().unwrap();
        engine.select(id(2), Answer::Multiple(Vec::new())).unwrap();

        assert!(!engine.render().next.enabled);
        assert_eq!(engine.advance().unwrap(), Transition::Blocked);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_single_select_overwrites() {
        let mut engine = QuizEngine::new(small());
        engine.select(id(1), Answer::single("a")).unwrap();
        engine.select(id(1), Answer::single("b")).unwrap();
        assert_eq!(engine.answers().single(id(1)).unwrap(), "b");
        assert_eq!(engine.render().selected_labels(), vec!["b"]);
    }

    #[test]
    fn test_multiple_select_replaces_not_merges() {
        let mut engine = QuizEngine::new(small());
        engine.select(id(1), Answer::single("a")).unwrap();
        engine.advance().unwrap();

        engine.select(id(2), Answer::multiple(["x", "y"])).unwrap();
        engine.select(id(2), Answer::multiple(["z"])).unwrap();
        assert_eq!(engine.answers().multiple(id(2)).unwrap(), &["z".to_string()]);

        // unchecking everything is reflected immediately
        engine.select(id(2), Answer::Multiple(Vec::new())).unwrap();
        assert!(engine.answers().multiple(id(2)).unwrap().is_empty());
        assert!(!engine.can_advance());
    }

    #[test]
    fn test_multiple_select_normalises_order() {
        let mut engine = QuizEngine::new(small());
        engine.select(id(1), Answer::single("a")).unwrap();
        engine.advance().unwrap();
        engine
            .select(id(2), Answer::multiple(["z", "x", "z"]))
            .unwrap();
        assert_eq!(
            engine.answers().multiple(id(2)).unwrap(),
            &["x".to_string(), "z".to_string()]
        );
    }

    #[test]
    fn test_select_rejects_unknown_option() {
        let mut engine = QuizEngine::new(small());
        let err = engine.select(id(1), Answer::single("c")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidChoice { question: 1, .. }));
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn test_select_rejects_wrong_shape() {
        let mut engine = QuizEngine::new(small());
        let err = engine.select(id(1), Answer::multiple(["a"])).unwrap_err();
        assert!(matches!(err, DomainError::AnswerShapeMismatch { .. }));
    }

    #[test]
    fn test_select_rejects_stale_question() {
        let mut engine = QuizEngine::new(small());
        let err = engine.select(id(3), Answer::single("yes")).unwrap_err();
        assert_eq!(err, DomainError::StaleSelection { current: 1, got: 3 });
        assert_eq!(
            engine.select(id(42), Answer::single("?")),
            Err(DomainError::UnknownQuestion(42))
        );
    }

    #[test]
    fn test_retreat() {
        let mut engine = QuizEngine::new(small());
        assert_eq!(engine.retreat(), Transition::Unchanged);

        engine.select(id(1), Answer::single("a")).unwrap();
        engine.advance().unwrap();
        assert!(engine.render().back_visible);
        // going back needs no answer on question 2
        assert_eq!(engine.retreat(), Transition::Moved { index: 0 });
        // previous answer is still shown
        assert_eq!(engine.render().selected_labels(), vec!["a"]);
        assert!(engine.render().next.enabled);
    }

    #[test]
    fn test_commit_on_last_question() {
        let mut engine = QuizEngine::new(small());
        engine.select(id(1), Answer::single("b")).unwrap();
        engine.advance().unwrap();
        engine.select(id(2), Answer::multiple(["y"])).unwrap();
        engine.advance().unwrap();
        engine.select(id(3), Answer::single("no")).unwrap();
        assert_eq!(engine.render().next.label, FINISH_LABEL);

        let committed = match engine.advance().unwrap() {
            Transition::Committed(answers) => answers,
            other => panic!("expected commit, got {:?}", other),
        };
        assert_eq!(committed.len(), 3);
        assert!(engine.is_committed());
        assert_eq!(engine.current_index(), 2);

        // terminal
        assert_eq!(engine.advance(), Err(DomainError::AlreadyCommitted));
        assert_eq!(engine.retreat(), Transition::Unchanged);
        assert_eq!(
            engine.select(id(3), Answer::single("yes")),
            Err(DomainError::AlreadyCommitted)
        );
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut engine = QuizEngine::new(small());
        assert_eq!(
            engine
                .apply(QuizEvent::Select {
                    question_id: id(1),
                    choice: Answer::single("a"),
                })
                .unwrap(),
            Transition::Selected
        );
        assert_eq!(
            engine.apply(QuizEvent::Next).unwrap(),
            Transition::Moved { index: 1 }
        );
        assert_eq!(
            engine.apply(QuizEvent::Back).unwrap(),
            Transition::Moved { index: 0 }
        );
    }

    /// Drives the engine with a long pseudo-random event stream and checks
    /// the index bound and the answer gate after every step.
    #[test]
    fn test_index_stays_in_bounds_for_event_sequences() {
        let questionnaire = default_questionnaire();
        let last = questionnaire.len() - 1;

        for seed in 1..=50u64 {
            let mut engine = QuizEngine::new(questionnaire.clone());
            let mut state = seed;
            for _ in 0..200 {
                if engine.is_committed() {
                    break;
                }
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let roll = (state >> 33) as usize;

                let before = engine.current_index();
                let valid_before = engine.can_advance();
                let question = engine.current_question().clone();
                let event = match roll % 4 {
                    0 => QuizEvent::Next,
                    1 => QuizEvent::Back,
                    _ => {
                        let pick = &question.options[roll % question.options.len()];
                        let choice = match question.kind {
                            QuestionKind::Single => Answer::single(pick.clone()),
                            QuestionKind::Multiple if roll % 5 == 0 => Answer::Multiple(Vec::new()),
                            QuestionKind::Multiple => Answer::multiple([pick.clone()]),
                        };
                        QuizEvent::Select {
                            question_id: question.id,
                            choice,
                        }
                    }
                };
                let is_next = event == QuizEvent::Next;
                let transition = engine.apply(event).unwrap();

                assert!(engine.current_index() <= last);
                if is_next && !valid_before {
                    assert_eq!(transition, Transition::Blocked);
                    assert_eq!(engine.current_index(), before);
                }
                if let Transition::Committed(answers) = transition {
                    assert_eq!(before, last);
                    assert!(answers.validate_complete(&questionnaire).is_ok());
                }
            }
        }
    }
}
