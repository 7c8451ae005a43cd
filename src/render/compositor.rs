//! The compositing pipeline.
//!
//! A render pass fully overwrites the target frame:
//!
//! 1. surface sized to the background's native dimensions, background at
//!    full opacity;
//! 2. every region outlined (blue for `door`, green otherwise) with its
//!    category labelled above the top edge;
//! 3. every placement's overlay scaled to exactly fill its region, blended
//!    at the global opacity;
//! 4. the optional drag preview last: heavy yellow outline, translucent
//!    tint, then the candidate image at the global opacity - visually on
//!    top of any placement already rendered for the same region.
//!
//! Full-frame redraw per pass is a deliberate design choice; callers that
//! want dirty-region tracking can layer it on top without changing the
//! visual contract.

use crate::constants::{
    DEFAULT_OUTLINE, DOOR_CATEGORY, DOOR_OUTLINE, HIGHLIGHT_OUTLINE, HIGHLIGHT_TINT,
    HIGHLIGHT_WIDTH, LABEL_OFFSET, LABEL_SIZE, OUTLINE_WIDTH,
};
use crate::data::error::LoadResult;
use crate::placement::PlacementStore;
use crate::render::draw;
use crate::types::{OverlayImage, Region};
use ab_glyph::FontArc;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// The in-progress drag state rendered on top of committed placements.
pub struct PreviewOverlay<'a> {
    pub region: &'a Region,
    pub image: &'a OverlayImage,
}

/// Renders frames from session state.
///
/// The label font is optional: without one, region outlines still render and
/// category labels are skipped.
#[derive(Default)]
pub struct Compositor {
    label_font: Option<FontArc>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given font for category labels.
    pub fn with_label_font(mut self, font: FontArc) -> Self {
        self.label_font = Some(font);
        self
    }

    /// Load a label font from a TTF/OTF file.
    pub fn with_label_font_file(self, path: &Path) -> LoadResult<Self> {
        let bytes = std::fs::read(path)?;
        let font = FontArc::try_from_vec(bytes)?;
        Ok(self.with_label_font(font))
    }

    /// Render one full frame.
    pub fn render(
        &self,
        background: &RgbaImage,
        regions: &[Region],
        placements: &PlacementStore,
        opacity: f32,
        preview: Option<PreviewOverlay<'_>>,
    ) -> RgbaImage {
        let mut frame = background.clone();

        for region in regions {
            let color = outline_color(&region.category);
            self.draw_region(&mut frame, region, color, OUTLINE_WIDTH);
        }

        for placement in placements.all() {
            let region = &placement.region;
            draw::blit_scaled(
                &mut frame,
                placement.image.image(),
                i64::from(region.x1),
                i64::from(region.y1),
                region.width(),
                region.height(),
                opacity,
            );
        }

        if let Some(preview) = preview {
            let region = preview.region;
            self.draw_region(&mut frame, region, HIGHLIGHT_OUTLINE, HIGHLIGHT_WIDTH);
            draw::fill_rect(
                &mut frame,
                i64::from(region.x1),
                i64::from(region.y1),
                i64::from(region.x2),
                i64::from(region.y2),
                HIGHLIGHT_TINT,
            );
            draw::blit_scaled(
                &mut frame,
                preview.image.image(),
                i64::from(region.x1),
                i64::from(region.y1),
                region.width(),
                region.height(),
                opacity,
            );
        }

        frame
    }

    /// Outline a region and label its category above the top edge.
    ///
    /// Degenerate regions render as zero-size: nothing is drawn.
    fn draw_region(&self, frame: &mut RgbaImage, region: &Region, color: Rgba<u8>, width: u32) {
        if region.is_degenerate() {
            return;
        }
        draw::stroke_rect(
            frame,
            i64::from(region.x1),
            i64::from(region.y1),
            i64::from(region.x2),
            i64::from(region.y2),
            width,
            color,
        );
        if let Some(font) = &self.label_font {
            draw::draw_text(
                frame,
                font,
                region.x1 as f32,
                region.y1 as f32 - LABEL_OFFSET - LABEL_SIZE,
                &region.category,
                color,
                LABEL_SIZE,
            );
        }
    }
}

fn outline_color(category: &str) -> Rgba<u8> {
    if category == DOOR_CATEGORY {
        DOOR_OUTLINE
    } else {
        DEFAULT_OUTLINE
    }
}
