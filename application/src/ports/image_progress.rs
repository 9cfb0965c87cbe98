//! Progress notification port for image generation

use super::image_generator::{ImageError, ImageReference};
use madori_domain::ImageSlot;
use std::time::Duration;

/// Callback for progress updates while images are generated
///
/// Implementations live in the presentation layer.
pub trait ImageProgressNotifier: Send + Sync {
    /// Called before the request for `slot` is sent
    fn on_slot_start(&self, slot: ImageSlot, prompt: &str);

    /// Called when the request for `slot` has finished, successfully or not
    fn on_slot_complete(&self, slot: ImageSlot, result: &Result<ImageReference, ImageError>);

    /// Called before pausing between two requests
    fn on_throttle(&self, _delay: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoImageProgress;

impl ImageProgressNotifier for NoImageProgress {
    fn on_slot_start(&self, _slot: ImageSlot, _prompt: &str) {}
    fn on_slot_complete(&self, _slot: ImageSlot, _result: &Result<ImageReference, ImageError>) {}
}
