//! Writes inline (`data:`) image references to disk.
//!
//! Hugging Face returns the image bytes inline; a terminal cannot show them,
//! so they are decoded and saved as `<dir>/<slot>.png`. Remote references are
//! left alone.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use madori_application::ports::image_generator::{ImageError, ImageReference};
use madori_domain::ImageSlot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Save `reference` under `dir` if it is inline.
///
/// Returns the written path, or `None` for remote references.
pub fn save_inline_image(
    reference: &ImageReference,
    slot: ImageSlot,
    dir: &Path,
) -> Result<Option<PathBuf>, ImageError> {
    let Some(payload) = reference.url.strip_prefix(DATA_URL_PREFIX) else {
        return Ok(None);
    };

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ImageError::Internal(format!("invalid image payload: {}", e)))?;

    fs::create_dir_all(dir)
        .map_err(|e| ImageError::Internal(format!("could not create {}: {}", dir.display(), e)))?;

    let path = dir.join(format!("{}.png", slot.as_str()));
    fs::write(&path, &bytes)
        .map_err(|e| ImageError::Internal(format!("could not write {}: {}", path.display(), e)))?;

    debug!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(Some(path))
}
