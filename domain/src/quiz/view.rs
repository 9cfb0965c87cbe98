//! Declarative display model of the question being shown

use super::question::{QuestionId, QuestionKind};
use serde::Serialize;

/// Label of the forward control on every question but the last
pub const NEXT_LABEL: &str = "次へ";

/// Label of the forward control on the last question
pub const FINISH_LABEL: &str = "診断結果を見る";

/// One option with its current selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

/// State of the forward control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextControl {
    pub label: &'static str,
    pub enabled: bool,
}

/// Everything needed to draw the current question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub question_id: QuestionId,
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<OptionView>,
    /// 1-based position of this question
    pub position: usize,
    pub total: usize,
    /// The back control is hidden on the first question
    pub back_visible: bool,
    pub next: NextControl,
}

impl QuestionView {
    /// Completion percentage, counting the current question as reached
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.position * 100) / self.total) as u8
    }

    /// "質問 3 / 8"
    pub fn progress_text(&self) -> String {
        format!("質問 {} / {}", self.position, self.total)
    }

    pub fn selected_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(position: usize, total: usize) -> QuestionView {
        QuestionView {
            question_id: QuestionId::new(position as u32),
            prompt: "?".to_string(),
            kind: QuestionKind::Single,
            options: vec![
                OptionView {
                    label: "a".to_string(),
                    selected: false,
                },
                OptionView {
                    label: "b".to_string(),
                    selected: true,
                },
            ],
            position,
            total,
            back_visible: position > 1,
            next: NextControl {
                label: NEXT_LABEL,
                enabled: true,
            },
        }
    }

    #[test]
    fn test_progress() {
        let v = view(2, 8);
        assert_eq!(v.progress_percent(), 25);
        assert_eq!(v.progress_text(), "質問 2 / 8");
        assert_eq!(view(8, 8).progress_percent(), 100);
    }

    #[test]
    fn test_selected_labels() {
        assert_eq!(view(1, 8).selected_labels(), vec!["b"]);
    }
}
