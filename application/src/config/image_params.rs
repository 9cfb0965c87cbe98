//! Image generation parameters for the use case loop.
//!
//! [`ImageParams`] groups the static parameters that control
//! [`GenerateImagesUseCase`](crate::use_cases::generate_images::GenerateImagesUseCase).
//! Provider details (endpoint, model, keys) belong to the infrastructure adapters.

use madori_domain::ImageSlot;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause between two provider calls
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageParams {
    /// Slots to generate, in order
    pub slots: Vec<ImageSlot>,
    /// Pause between consecutive requests so they never overlap at the provider
    pub request_delay: Duration,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            slots: ImageSlot::ALL.to_vec(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl ImageParams {
    // ==================== Builder Methods ====================

    pub fn with_slots(mut self, slots: Vec<ImageSlot>) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_only(self, slot: ImageSlot) -> Self {
        self.with_slots(vec![slot])
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }
}
