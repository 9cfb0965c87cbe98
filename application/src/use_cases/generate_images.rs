//! Generate Images use case.
//!
//! Sends the exterior and floor-plan prompts to the [`ImageGenerator`] one
//! after the other, pausing between requests so they never overlap at the
//! provider. Each slot succeeds or fails on its own; a failed slot never
//! stops the next one.

use crate::config::ImageParams;
use crate::ports::image_generator::{ImageError, ImageGenerator, ImageReference};
use crate::ports::image_progress::ImageProgressNotifier;
use madori_domain::{ImagePrompts, ImageSlot};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one slot
#[derive(Debug, Clone)]
pub struct SlotOutcome {
    pub slot: ImageSlot,
    pub prompt: String,
    pub result: Result<ImageReference, ImageError>,
}

#[derive(Debug, Clone)]
pub struct GenerateImagesOutput {
    pub provider: String,
    pub outcomes: Vec<SlotOutcome>,
}

impl GenerateImagesOutput {
    #[cfg(test)]
    fn get(&self, slot: ImageSlot) -> Option<&SlotOutcome> {
        self.outcomes.iter().find(|o| o.slot == slot)
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Use case for generating the result-page images
pub struct GenerateImagesUseCase {
    generator: Arc<dyn ImageGenerator>,
    params: ImageParams,
}

impl GenerateImagesUseCase {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            generator,
            params: ImageParams::default(),
        }
    }

    pub fn with_params(mut self, params: ImageParams) -> Self {
        self.params = params;
        self
    }

    /// Generate one slot
    pub async fn generate_slot(&self, slot: ImageSlot, prompt: &str) -> SlotOutcome {
        info!(
            "Requesting {} image from {}",
            slot,
            self.generator.provider_name()
        );
        let result = if prompt.trim().is_empty() {
            Err(ImageError::InvalidRequest("prompt is empty".to_string()))
        } else {
            self.generator.generate(prompt).await
        };
        if let Err(e) = &result {
            warn!("{} image failed: {}", slot, e);
        }
        SlotOutcome {
            slot,
            prompt: prompt.to_string(),
            result,
        }
    }

    /// Generate every configured slot, in order, with the courtesy delay in between
    pub async fn execute(
        &self,
        prompts: &ImagePrompts,
        progress: &dyn ImageProgressNotifier,
    ) -> GenerateImagesOutput {
        let mut outcomes = Vec::with_capacity(self.params.slots.len());

        for (i, slot) in self.params.slots.iter().copied().enumerate() {
            if i > 0 && !self.params.request_delay.is_zero() {
                progress.on_throttle(self.params.request_delay);
                tokio::time::sleep(self.params.request_delay).await;
            }

            let prompt = prompts.get(slot);
            progress.on_slot_start(slot, prompt);
            let outcome = self.generate_slot(slot, prompt).await;
            progress.on_slot_complete(slot, &outcome.result);
            outcomes.push(outcome);
        }

        let output = GenerateImagesOutput {
            provider: self.generator.provider_name().to_string(),
            outcomes,
        };
        info!(
            "Generated {} of {} images",
            output.outcomes.len() - output.failures(),
            output.outcomes.len()
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::image_progress::NoImageProgress;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Generator that returns canned results in order and records prompts
    struct CannedGenerator {
        results: Mutex<VecDeque<Result<ImageReference, ImageError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn new(results: Vec<Result<ImageReference, ImageError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ImageGenerator for CannedGenerator {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, prompt: &str) -> Result<ImageReference, ImageError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ImageError::Internal("no result".to_string())))
        }
    }

    /// Records the order of progress callbacks
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ImageProgressNotifier for RecordingProgress {
        fn on_slot_start(&self, slot: ImageSlot, _prompt: &str) {
            self.events.lock().unwrap().push(format!("start {}", slot));
        }

        fn on_slot_complete(&self, slot: ImageSlot, result: &Result<ImageReference, ImageError>) {
            let status = if result.is_ok() { "ok" } else { "err" };
            self.events
                .lock()
                .unwrap()
                .push(format!("done {} {}", slot, status));
        }

        fn on_throttle(&self, _delay: Duration) {
            self.events.lock().unwrap().push("wait".to_string());
        }
    }

    fn prompts() -> ImagePrompts {
        ImagePrompts {
            exterior: "exterior prompt".to_string(),
            floor_plan: "floor plan prompt".to_string(),
        }
    }

    fn no_delay() -> ImageParams {
        ImageParams::default().with_request_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_both_slots_in_order() {
        let generator = Arc::new(CannedGenerator::new(vec![
            Ok(ImageReference::new("https://img/exterior.png")),
            Ok(ImageReference::new("data:image/png;base64,AAAA")),
        ]));
        let use_case = GenerateImagesUseCase::new(generator.clone()).with_params(no_delay());

        let output = use_case.execute(&prompts(), &NoImageProgress).await;

        assert_eq!(output.provider, "canned");
        assert_eq!(output.failures(), 0);
        assert_eq!(
            *generator.prompts.lock().unwrap(),
            vec!["exterior prompt", "floor plan prompt"]
        );
        assert!(
            output
                .get(ImageSlot::FloorPlan)
                .unwrap()
                .result
                .as_ref()
                .unwrap()
                .is_inline()
        );
    }

    #[tokio::test]
    async fn test_failed_slot_does_not_block_the_other() {
        let generator = Arc::new(CannedGenerator::new(vec![
            Err(ImageError::model_loading()),
            Ok(ImageReference::new("https://img/plan.png")),
        ]));
        let use_case = GenerateImagesUseCase::new(generator).with_params(no_delay());

        let output = use_case.execute(&prompts(), &NoImageProgress).await;

        assert_eq!(output.failures(), 1);
        let exterior = output.get(ImageSlot::Exterior).unwrap();
        assert!(exterior.result.as_ref().unwrap_err().is_retryable());
        assert!(output.get(ImageSlot::FloorPlan).unwrap().result.is_ok());
    }

    #[tokio::test]
    async fn test_requests_are_spaced_by_delay() {
        let generator = Arc::new(CannedGenerator::new(vec![
            Ok(ImageReference::new("a")),
            Ok(ImageReference::new("b")),
        ]));
        let delay = Duration::from_millis(30);
        let use_case = GenerateImagesUseCase::new(generator)
            .with_params(ImageParams::default().with_request_delay(delay));
        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };

        let started = Instant::now();
        use_case.execute(&prompts(), &progress).await;

        assert!(started.elapsed() >= delay);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start exterior",
                "done exterior ok",
                "wait",
                "start floor-plan",
                "done floor-plan ok",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_without_calling_provider() {
        let generator = Arc::new(CannedGenerator::new(vec![Ok(ImageReference::new("a"))]));
        let use_case = GenerateImagesUseCase::new(generator.clone());

        let outcome = use_case.generate_slot(ImageSlot::Exterior, "  ").await;

        assert!(matches!(outcome.result, Err(ImageError::InvalidRequest(_))));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_slot_has_no_delay() {
        let generator = Arc::new(CannedGenerator::new(vec![Ok(ImageReference::new("a"))]));
        let use_case = GenerateImagesUseCase::new(generator.clone()).with_params(
            ImageParams::default()
                .with_only(ImageSlot::FloorPlan)
                .with_request_delay(Duration::from_secs(60)),
        );

        let output = use_case.execute(&prompts(), &NoImageProgress).await;

        assert_eq!(output.outcomes.len(), 1);
        assert_eq!(*generator.prompts.lock().unwrap(), vec!["floor plan prompt"]);
    }
}
