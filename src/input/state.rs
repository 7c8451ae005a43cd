//! Placement state machine - explicit state for the interaction lifecycle.
//!
//! Replaces the original's scattered drag flags with a single enum, making
//! impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle          -> ImageSelected      (image uploaded/selected)
//! ImageSelected -> ImageSelected      (re-select; prior selection dropped,
//!                                      committed placements untouched)
//! ImageSelected -> Hovering(region)   (pointer down inside a region;
//!                                      the placement commits immediately)
//! Hovering      -> Hovering           (pointer move; target fixed at press)
//! Hovering      -> ImageSelected      (pointer up)
//! ```
//!
//! Pointer-down outside every region is not a transition. There is no cancel:
//! a committed placement is only changed by pressing into the region again.

use crate::types::RegionId;

/// Unified interaction state for the placement session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementState {
    /// No image selected; clicks do nothing
    #[default]
    Idle,

    /// An uploaded image is ready to place
    ImageSelected,

    /// Pointer held down inside a region; the placement is already committed
    Hovering {
        /// Drag target, fixed at press time and never re-resolved
        region_id: RegionId,
    },
}

impl PlacementState {
    /// Returns true if no image is selected yet
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if an image is selected and no press is active
    pub fn is_image_selected(&self) -> bool {
        matches!(self, Self::ImageSelected)
    }

    /// Returns true while the pointer is held down inside a region
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering { .. })
    }

    /// Get the active drag target, if any
    pub fn hover_target(&self) -> Option<RegionId> {
        match self {
            Self::Hovering { region_id } => Some(*region_id),
            _ => None,
        }
    }

    /// Image selected (or re-selected)
    pub fn select_image(&mut self) {
        if !self.is_hovering() {
            *self = Self::ImageSelected;
        }
    }

    /// Pointer pressed inside a region
    pub fn start_hover(&mut self, region_id: RegionId) {
        *self = Self::Hovering { region_id };
    }

    /// Pointer released
    pub fn end_hover(&mut self) {
        if self.is_hovering() {
            *self = Self::ImageSelected;
        }
    }
}
