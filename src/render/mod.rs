//! Compositing: layered drawing of background, region outlines, placed
//! overlays, and the in-progress drag preview.

mod compositor;
mod draw;

pub use compositor::{Compositor, PreviewOverlay};
