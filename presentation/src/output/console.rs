//! Console output formatter for diagnosis results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use madori_application::SlotOutcome;
use madori_application::ports::image_generator::{ImageError, ImageReference};
use madori_domain::{ImageSlot, Recommendation};
use std::path::{Path, PathBuf};

/// Formats recommendations and image results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result page
    pub fn format(rec: &Recommendation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("診断結果"));
        output.push('\n');

        // Summary
        let summary = &rec.summary;
        output.push_str(&Self::section_header("あなたにおすすめの住まい"));
        output.push_str(&Self::field("家族構成", &summary.family_type));
        output.push_str(&Self::field("希望間取り", &summary.rooms));
        output.push_str(&Self::field("予算感", &summary.budget));
        output.push_str(&Self::field("外観スタイル", &summary.style));
        output.push_str(&format!("\n  {}\n", summary.narrative.green()));

        // Layout
        let layout = &rec.layout;
        output.push_str(&Self::section_header("おすすめの間取り"));
        output.push_str(&format!(
            "{}\n  {}\n",
            "おすすめの間取りコンセプト:".cyan().bold(),
            layout.concept
        ));
        output.push_str(&format!(
            "\n{}\n  {}\n",
            "ライフスタイルに合わせた提案:".cyan().bold(),
            layout.lifestyle
        ));
        if !layout.facilities.is_empty() {
            output.push_str(&format!("\n{}\n", "ご希望の設備:".cyan().bold()));
            output.push_str(&Self::bullets(&layout.facilities));
        }
        if !layout.priorities.is_empty() {
            output.push_str(&format!("\n{}\n", "重視するポイント:".cyan().bold()));
            output.push_str(&Self::bullets(&layout.priorities));
        }

        // Budget
        let budget = &rec.budget;
        output.push_str(&Self::section_header("予算と坪数の目安"));
        output.push_str(&Self::field("ご予算", &budget.budget));
        output.push_str(&Self::field("推奨坪数", &budget.floor_area));
        output.push_str(&format!(
            "\n{}\n{}\n",
            "アドバイス:".yellow().bold(),
            Self::indent(&budget.advice, "  ")
        ));

        // Vendors
        output.push_str(&Self::section_header("おすすめのハウスメーカー"));
        for vendor in &rec.vendors {
            let tags = vendor
                .features
                .iter()
                .map(|f| format!("#{}", f))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!(
                "\n{}\n  {}\n  {}\n",
                format!("── {} ──", vendor.name).yellow().bold(),
                vendor.description,
                tags.dimmed()
            ));
        }

        // Images
        output.push_str(&Self::section_header("イメージ"));
        for slot in ImageSlot::ALL {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}:", slot.caption()).cyan(),
                rec.image_prompts.get(slot).dimmed()
            ));
        }
        output.push_str(&format!(
            "\n{} で画像を生成できます。\n",
            "madori images".bold()
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(rec: &Recommendation) -> String {
        serde_json::to_string_pretty(rec).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per generated image: where to find it, or why it failed
    pub fn format_image_outcome(
        slot: ImageSlot,
        result: &Result<ImageReference, ImageError>,
        saved_to: Option<&Path>,
    ) -> String {
        let caption = format!("{}:", slot.caption()).cyan().bold();
        match result {
            Ok(reference) => {
                let location = match saved_to {
                    Some(path) => path.display().to_string(),
                    None => reference.url.clone(),
                };
                format!("{} {} {}", caption, "v".green(), location)
            }
            Err(e) => {
                let message = match e {
                    ImageError::ModelLoading { message } => message.clone(),
                    other => format!("画像の生成に失敗しました: {}", other),
                };
                format!(
                    "{} {} {}\n  {}",
                    caption,
                    "x".red(),
                    message,
                    format!("再試行: madori images --only {}", slot).dimmed()
                )
            }
        }
    }

    /// Save each generated image with `save` and render one line per slot.
    ///
    /// A slot whose image cannot be saved is reported as failed; the
    /// remaining slots are still saved and rendered. Returns the lines and
    /// the number of failed slots.
    pub fn format_image_results<F>(outcomes: &[SlotOutcome], mut save: F) -> (Vec<String>, usize)
    where
        F: FnMut(&ImageReference, ImageSlot) -> Result<Option<PathBuf>, ImageError>,
    {
        let mut lines = Vec::with_capacity(outcomes.len());
        let mut failures = 0;

        for outcome in outcomes {
            let line = match &outcome.result {
                Ok(reference) => match save(reference, outcome.slot) {
                    Ok(saved) => {
                        Self::format_image_outcome(outcome.slot, &outcome.result, saved.as_deref())
                    }
                    Err(e) => {
                        failures += 1;
                        Self::format_image_outcome(outcome.slot, &Err(e), None)
                    }
                },
                Err(_) => {
                    failures += 1;
                    Self::format_image_outcome(outcome.slot, &outcome.result, None)
                }
            };
            lines.push(line);
        }

        (lines, failures)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", format!("{}:", label).bold(), value)
    }

    fn bullets(items: &[String]) -> String {
        items.iter().map(|item| format!("  ・{}\n", item)).collect()
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, recommendation: &Recommendation) -> String {
        Self::format(recommendation)
    }

    fn format_json(&self, recommendation: &Recommendation) -> String {
        Self::format_json(recommendation)
    }
}
