//! Application-wide constants.
//!
//! Centralizes magic numbers and drawing values to make the codebase
//! more maintainable and self-documenting.

use image::Rgba;

// ============================================================================
// Categories
// ============================================================================

/// Category assigned to regions whose coordinate line carries no label token
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Category drawn with the distinguished outline color
pub const DOOR_CATEGORY: &str = "door";

// ============================================================================
// Drawing
// ============================================================================

/// Outline color for `door` regions
pub const DOOR_OUTLINE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Outline color for every other category
pub const DEFAULT_OUTLINE: Rgba<u8> = Rgba([0, 128, 0, 255]);

/// Outline color for the active drag target
pub const HIGHLIGHT_OUTLINE: Rgba<u8> = Rgba([255, 255, 0, 255]);

/// Translucent fill tint over the active drag target
pub const HIGHLIGHT_TINT: Rgba<u8> = Rgba([255, 255, 0, 26]);

/// Stroke width of region outlines in pixels
pub const OUTLINE_WIDTH: u32 = 2;

/// Stroke width of the drag-target highlight in pixels
pub const HIGHLIGHT_WIDTH: u32 = 3;

/// Font size of category labels in pixels
pub const LABEL_SIZE: f32 = 12.0;

/// Vertical gap between a region's top edge and its label baseline
pub const LABEL_OFFSET: f32 = 5.0;

// ============================================================================
// Opacity
// ============================================================================

/// Default global overlay opacity
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Upper bound of the externally driven opacity input
pub const OPACITY_INPUT_MAX: f32 = 100.0;
