//! Progress reporting for image generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use madori_application::ports::image_generator::{ImageError, ImageReference};
use madori_application::ports::image_progress::ImageProgressNotifier;
use madori_domain::ImageSlot;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, prefix: String, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(previous) = spinner.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProgressNotifier for ProgressReporter {
    fn on_slot_start(&self, slot: ImageSlot, _prompt: &str) {
        self.start(slot.caption().to_string(), "生成中...".to_string());
    }

    fn on_slot_complete(&self, _slot: ImageSlot, result: &Result<ImageReference, ImageError>) {
        let status = if result.is_ok() {
            "完了".green().to_string()
        } else {
            "失敗".red().to_string()
        };
        self.finish(status);
    }

    fn on_throttle(&self, delay: Duration) {
        self.start(
            "待機".to_string(),
            format!("次のリクエストまで {}秒", delay.as_secs_f32()),
        );
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ImageProgressNotifier for SimpleProgress {
    fn on_slot_start(&self, slot: ImageSlot, _prompt: &str) {
        println!("{} {} を生成中...", "->".cyan(), slot.caption().bold());
    }

    fn on_slot_complete(&self, slot: ImageSlot, result: &Result<ImageReference, ImageError>) {
        if result.is_ok() {
            println!("  {} {}", "v".green(), slot.caption());
        } else {
            println!("  {} {} (failed)", "x".red(), slot.caption());
        }
    }
}
