//! Placeboard - place overlay images into annotated regions of a background image.
//!
//! The library loads a background raster plus a plain-text coordinate file
//! describing rectangular regions, then lets a caller drive an interactive
//! placement session with pointer events: select an uploaded image, press
//! inside a region to commit it there, and render the layered composite at a
//! global overlay opacity.
//!
//! ## Architecture
//!
//! - [`data`] - coordinate-file parsing, image decoding, typed errors
//! - [`spatial_index`] - R-tree hit testing over region bounding boxes
//! - [`placement`] - region-to-overlay assignments (last-write-wins)
//! - [`render`] - pixel-level compositing of background, outlines, overlays
//! - [`input`] - explicit placement state machine
//! - [`session`] - the value object tying it all together

pub mod constants;
pub mod data;
pub mod input;
pub mod placement;
pub mod render;
pub mod session;
pub mod spatial_index;
pub mod types;

pub use data::error::{LoadError, RenderError};
pub use input::PlacementState;
pub use placement::{Placement, PlacementStore};
pub use render::Compositor;
pub use session::{Redraw, Session};
pub use types::{OverlayImage, Region, RegionId};
