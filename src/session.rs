//! The placement session.
//!
//! An explicit value object owning all mutable state that the original
//! implementation kept in module-level globals: the region list, spatial
//! index, placement store, currently selected upload, global opacity, the
//! interaction state machine, and the single-line status channel. UI event
//! handlers are expected to be thin adapters translating host events into
//! the pointer/upload/opacity calls below.
//!
//! All load failures are caught here and converted into a status message;
//! none of them terminate the session, and nothing retries - recovery is a
//! new user-initiated load.

use crate::constants::{DEFAULT_OPACITY, OPACITY_INPUT_MAX};
use crate::data::error::{LoadError, RenderError};
use crate::data::{decode_overlay, is_image_media_type, load_background, parse_coordinates};
use crate::input::PlacementState;
use crate::placement::PlacementStore;
use crate::render::{Compositor, PreviewOverlay};
use crate::spatial_index::SpatialIndex;
use crate::types::{OverlayImage, Region};
use image::RgbaImage;
use std::path::Path;
use tracing::{info, warn};

/// What a state change asks the caller to redraw.
///
/// Renders are permissible-but-racy: nothing cancels an in-flight frame, a
/// newer request simply races an older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing changed visually
    None,
    /// Re-render committed placements only
    Full,
    /// Re-render with the active drag preview on top
    Preview,
}

/// All in-memory state of one placement session.
pub struct Session {
    regions: Vec<Region>,
    index: SpatialIndex,
    placements: PlacementStore,
    background: Option<RgbaImage>,
    current_image: Option<OverlayImage>,
    opacity: f32,
    state: PlacementState,
    preview_visible: bool,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            index: SpatialIndex::new(),
            placements: PlacementStore::new(),
            background: None,
            current_image: None,
            opacity: DEFAULT_OPACITY,
            state: PlacementState::default(),
            preview_visible: false,
            status: "Ready to place images".to_string(),
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Replace the region list from coordinate text.
    ///
    /// Regions are replaced wholesale; placements are cleared so every stored
    /// placement always refers to a current region.
    pub fn load_regions(&mut self, text: &str) {
        self.regions = parse_coordinates(text);
        self.index.rebuild(&self.regions);
        self.placements.clear();
        info!(regions = self.regions.len(), "coordinates loaded");
    }

    /// Load the coordinate file from disk.
    ///
    /// A failed read yields an empty region list and a status message, not an
    /// error: the session stays usable.
    pub fn load_regions_from_path(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(text) => self.load_regions(&text),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "coordinate load failed");
                self.regions.clear();
                self.index.clear();
                self.placements.clear();
                self.status = format!("Error loading coordinates file: {err}");
            }
        }
    }

    /// Supply an already decoded background image.
    pub fn set_background(&mut self, background: RgbaImage) {
        self.background = Some(background);
    }

    /// Load and decode the background image from disk.
    ///
    /// On failure the previous background (if any) is left untouched and the
    /// status channel reports the error.
    pub fn load_background_from_path(&mut self, path: &Path) {
        match load_background(path) {
            Ok(background) => self.background = Some(background),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "background load failed");
                self.status = format!("Error loading background image: {err}");
            }
        }
    }

    // ========================================================================
    // Upload funnel
    // ========================================================================

    /// Decode uploaded bytes and make the result the current selectable
    /// image. Drop and file-picker interactions both funnel here.
    ///
    /// `media_type`, when declared by the host, must begin with `image/`.
    /// Failures surface on the status channel; committed placements keep
    /// their own image handles and are unaffected.
    pub fn select_image_bytes(&mut self, bytes: &[u8], media_type: Option<&str>) -> Redraw {
        if let Some(media_type) = media_type {
            if !is_image_media_type(media_type) {
                let err = LoadError::UnsupportedMediaType(media_type.to_string());
                warn!(%err, "upload rejected");
                self.status = format!("Error loading image: {err}");
                return Redraw::None;
            }
        }
        match decode_overlay(bytes) {
            Ok(image) => self.select_image(image),
            Err(err) => {
                warn!(%err, "upload decode failed");
                self.status = format!("Error loading image: {err}");
                Redraw::None
            }
        }
    }

    /// Make an already decoded image the current selection.
    ///
    /// Re-entrant from `ImageSelected`: the prior selection reference is
    /// simply dropped.
    pub fn select_image(&mut self, image: OverlayImage) -> Redraw {
        self.current_image = Some(image);
        self.state.select_image();
        self.status = "Image loaded - click a region to place".to_string();
        Redraw::None
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    /// Pointer pressed at `(x, y)` in background-image pixel space.
    ///
    /// With an image selected and the point inside a region, the placement
    /// commits immediately - placing is not reversible by dragging away
    /// before release. Outside every region nothing changes.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Redraw {
        let Some(image) = self.current_image.clone() else {
            return Redraw::None;
        };
        let Some(ord) = self.index.hit_test(x, y) else {
            return Redraw::None;
        };
        let Some(region) = self.regions.get(ord) else {
            return Redraw::None;
        };

        self.placements.place(region, image);
        self.state.start_hover(region.id);
        self.preview_visible = false;
        self.status = format!("Image placed in {} region", region.category);
        info!(category = %region.category, x = region.x1, y = region.y1, "placement committed");
        Redraw::Full
    }

    /// Pointer moved while held down.
    ///
    /// The drag target stays fixed at press time: moving outside the canvas
    /// or over a different region does not re-resolve it. Each move asks for
    /// a preview redraw of the candidate image in the target region.
    pub fn pointer_move(&mut self, _x: f32, _y: f32) -> Redraw {
        if self.state.is_hovering() && self.current_image.is_some() {
            self.preview_visible = true;
            Redraw::Preview
        } else {
            Redraw::None
        }
    }

    /// Pointer released: clear the preview and fall back to the committed
    /// frame.
    pub fn pointer_up(&mut self) -> Redraw {
        if !self.state.is_hovering() {
            return Redraw::None;
        }
        self.state.end_hover();
        self.preview_visible = false;
        Redraw::Full
    }

    // ========================================================================
    // Opacity
    // ========================================================================

    /// Externally driven opacity input in `[0, 100]`, mapped linearly to
    /// `[0, 1]`. Valid in any state; always forces a redraw so every
    /// rendered overlay (and any active preview) picks up the new value.
    pub fn set_opacity_percent(&mut self, value: f32) -> Redraw {
        self.opacity = (value / OPACITY_INPUT_MAX).clamp(0.0, 1.0);
        if self.preview_visible {
            Redraw::Preview
        } else {
            Redraw::Full
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Compose the current frame.
    ///
    /// The preview layer is included only while a press is active and a move
    /// has made it visible. Without a decoded background there is nothing to
    /// size the surface from, so rendering aborts with an error the caller
    /// can surface.
    pub fn render(&self, compositor: &Compositor) -> Result<RgbaImage, RenderError> {
        let background = self.background.as_ref().ok_or(RenderError::MissingBackground)?;

        let preview = if self.preview_visible {
            self.active_preview()
        } else {
            None
        };

        Ok(compositor.render(background, &self.regions, &self.placements, self.opacity, preview))
    }

    fn active_preview(&self) -> Option<PreviewOverlay<'_>> {
        let region_id = self.state.hover_target()?;
        let image = self.current_image.as_ref()?;
        let region = self.regions.iter().find(|r| r.id == region_id)?;
        Some(PreviewOverlay { region, image })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn placements(&self) -> &PlacementStore {
        &self.placements
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn current_image(&self) -> Option<&OverlayImage> {
        self.current_image.as_ref()
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// The single human-readable status line, overwritten on each
    /// significant event.
    pub fn status(&self) -> &str {
        &self.status
    }
}
