//! Core types for the placement session.
//!
//! This module defines the fundamental data structures used throughout the
//! library: regions parsed from the coordinate file, decoded overlay images,
//! and the identity linking the two.

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identity of a region, derived deterministically from its `(x1, y1)` origin.
///
/// Two regions sharing an origin corner collide onto the same id and
/// therefore share a placement slot; the last write wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(u64);

impl RegionId {
    pub fn from_origin(x1: u32, y1: u32) -> Self {
        Self((u64::from(x1) << 32) | u64::from(y1))
    }
}

/// An axis-aligned rectangular region parsed from the coordinate file.
///
/// Immutable once parsed; the whole region list is replaced wholesale on
/// reload. Coordinates are in background-image pixel space. The parser does
/// not enforce `x1 < x2` or `y1 < y2`, so consumers must tolerate degenerate
/// (zero-area or inverted) rectangles: they render as zero-size and never
/// match a hit test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Identity derived from the `(x1, y1)` origin
    pub id: RegionId,
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    /// Free-form label, `"unknown"` when the line carried none
    pub category: String,
}

impl Region {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32, category: impl Into<String>) -> Self {
        Self {
            id: RegionId::from_origin(x1, y1),
            x1,
            y1,
            x2,
            y2,
            category: category.into(),
        }
    }

    /// Width of the region, zero for inverted rectangles.
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height of the region, zero for inverted rectangles.
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// A degenerate region has no interior: zero-area or inverted bounds.
    pub fn is_degenerate(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Inclusive containment on all four edges.
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x1 as f32 && x <= self.x2 as f32 && y >= self.y1 as f32 && y <= self.y2 as f32
    }
}

/// A decoded overlay image: an opaque raster handle plus its natural
/// dimensions.
///
/// Cloning is cheap (shared pixels). Placements hold their own handle, so
/// replacing the session's current selectable image never invalidates
/// overlays that were already committed.
#[derive(Clone, Debug)]
pub struct OverlayImage {
    pixels: Arc<RgbaImage>,
    width: u32,
    height: u32,
}

impl OverlayImage {
    pub fn new(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            pixels: Arc::new(image),
            width,
            height,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Natural pixel dimensions of the decoded bitmap.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
