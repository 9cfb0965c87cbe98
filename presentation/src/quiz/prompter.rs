//! Terminal quiz prompter.
//!
//! Draws the current [`QuestionView`] and reads one line per action.
//!
//! ```text
//! 質問 2 / 8  [#####---------------]  25%
//!
//! Q2. 希望する部屋数は？
//!   1) ( ) 1LDK
//!   2) (*) 2LDK
//!   ...
//!
//! 番号: 選択 / Enter: 次へ / b: 戻る / q: 中断
//! madori>
//! ```
//!
//! # Commands
//!
//! | Input | Action |
//! |-------|--------|
//! | `2` | Select option 2 (single choice) |
//! | `1,3` or `1 3` | Select exactly options 1 and 3 (multiple choice) |
//! | `-` | Clear a multiple-choice selection |
//! | Enter, `n` | Next (or finish on the last question) |
//! | `b` | Back |
//! | `q` | Quit without saving |

use async_trait::async_trait;
use colored::Colorize;
use madori_application::ports::quiz_prompter::{
    PrompterError, QuizAction, QuizNotice, QuizPrompter,
};
use madori_domain::{Answer, QuestionKind, QuestionView, QuizEvent};
use std::io::{self, Write};

const BAR_WIDTH: usize = 20;

/// Interactive [`QuizPrompter`] over stdin/stdout
pub struct TerminalQuizPrompter;

impl TerminalQuizPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Read one line. `None` on end of input.
    fn read_line(&self) -> Result<Option<String>, PrompterError> {
        print!("{} ", "madori>".magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| PrompterError::Io(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .map_err(|e| PrompterError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl Default for TerminalQuizPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizPrompter for TerminalQuizPrompter {
    async fn next_action(&self, view: &QuestionView) -> Result<QuizAction, PrompterError> {
        println!("{}", render_view(view));

        loop {
            let Some(input) = self.read_line()? else {
                println!();
                return Ok(QuizAction::Quit);
            };

            match parse_input(&input, view) {
                Ok(action) => return Ok(action),
                Err(message) => println!("{}", message.red()),
            }
        }
    }

    fn notify(&self, notice: &QuizNotice) {
        match notice {
            QuizNotice::AnswerRequired => {
                println!("{}", "回答を選択してから進んでください。".yellow());
            }
            QuizNotice::Rejected(e) => println!("{} {}", "!".red().bold(), e),
        }
    }
}

/// Text progress bar, e.g. `[#####---------------]`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Draw a question as terminal text
pub fn render_view(view: &QuestionView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}  {} {:>3}%\n\n",
        view.progress_text().cyan().bold(),
        progress_bar(view.progress_percent(), BAR_WIDTH).cyan(),
        view.progress_percent()
    ));

    let hint = match view.kind {
        QuestionKind::Single => "",
        QuestionKind::Multiple => " (複数選択可)",
    };
    out.push_str(&format!(
        "{}{}\n",
        format!("Q{}. {}", view.position, view.prompt).bold(),
        hint.dimmed()
    ));

    for (i, option) in view.options.iter().enumerate() {
        let mark = match (view.kind, option.selected) {
            (QuestionKind::Single, true) => "(*)",
            (QuestionKind::Single, false) => "( )",
            (QuestionKind::Multiple, true) => "[x]",
            (QuestionKind::Multiple, false) => "[ ]",
        };
        let line = format!("  {}) {} {}", i + 1, mark, option.label);
        if option.selected {
            out.push_str(&format!("{}\n", line.green()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }

    let mut controls = vec!["番号: 選択".to_string()];
    if view.next.enabled {
        controls.push(format!("Enter: {}", view.next.label));
    }
    if view.back_visible {
        controls.push("b: 戻る".to_string());
    }
    controls.push("q: 中断".to_string());
    out.push_str(&format!("\n{}", controls.join(" / ").dimmed()));

    out
}

/// Turn one line of input into an action for `view`
pub fn parse_input(input: &str, view: &QuestionView) -> Result<QuizAction, String> {
    match input.to_lowercase().as_str() {
        "" | "n" | "next" => return Ok(QuizAction::Event(QuizEvent::Next)),
        "b" | "back" => {
            if view.back_visible {
                return Ok(QuizAction::Event(QuizEvent::Back));
            }
            return Err("最初の質問です。".to_string());
        }
        "q" | "quit" => return Ok(QuizAction::Quit),
        "-" if view.kind == QuestionKind::Multiple => {
            return Ok(select(view, Answer::multiple(Vec::<String>::new())));
        }
        _ => {}
    }

    let labels = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| option_label(part, view))
        .collect::<Result<Vec<_>, _>>()?;

    match view.kind {
        QuestionKind::Single => match labels.as_slice() {
            [label] => Ok(select(view, Answer::single(*label))),
            _ => Err("1つだけ選んでください。".to_string()),
        },
        QuestionKind::Multiple => Ok(select(view, Answer::multiple(labels))),
    }
}

fn option_label<'a>(part: &str, view: &'a QuestionView) -> Result<&'a str, String> {
    part.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| view.options.get(i))
        .map(|o| o.label.as_str())
        .ok_or_else(|| {
            format!(
                "'{}' は選択肢にありません (1〜{})。",
                part,
                view.options.len()
            )
        })
}

fn select(view: &QuestionView, choice: Answer) -> QuizAction {
    QuizAction::Event(QuizEvent::Select {
        question_id: view.question_id,
        choice,
    })
}
