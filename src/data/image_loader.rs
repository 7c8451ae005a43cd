//! Image decoding boundary
//!
//! The only suspension points of the session are decodes: uploaded bytes to
//! an [`OverlayImage`], a path to the background raster. Both are plain
//! fallible calls here; the session converts failures into status text.

use crate::data::error::{LoadError, LoadResult};
use crate::types::OverlayImage;
use image::RgbaImage;
use std::path::Path;
use tracing::info;

/// Returns true for media types the upload funnel accepts.
///
/// Both the drop interaction and the file picker funnel into the same
/// decode-and-select operation, gated on a declared `image/*` type.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Decode uploaded bytes into an overlay image.
pub fn decode_overlay(bytes: &[u8]) -> LoadResult<OverlayImage> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    Ok(OverlayImage::new(decoded))
}

/// Load and decode the background image from disk.
pub fn load_background(path: &Path) -> LoadResult<RgbaImage> {
    let decoded = image::open(path)?.to_rgba8();
    info!(path = %path.display(), width = decoded.width(), height = decoded.height(), "background loaded");
    Ok(decoded)
}
